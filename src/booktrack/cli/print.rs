use booktrack::api::{CmdMessage, MessageLevel, TaskOutcome};
use booktrack::metrics::MetricsSnapshot;
use booktrack::model::Book;
use booktrack::task::TaskReport;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const TITLE_WIDTH: usize = 30;
const AUTHOR_WIDTH: usize = 20;
const ISBN_WIDTH: usize = 15;
const COPIES_WIDTH: usize = 5;

/// Left-align `s` in `width` terminal columns; longer text is not cut.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub(super) fn format_header() -> String {
    format!(
        "{} {} {} {:>w$}",
        pad("Title", TITLE_WIDTH),
        pad("Author", AUTHOR_WIDTH),
        pad("ISBN", ISBN_WIDTH),
        "Copies",
        w = COPIES_WIDTH
    )
}

pub(super) fn format_book(book: &Book) -> String {
    format!(
        "{} {} {} {}",
        pad(book.title(), TITLE_WIDTH),
        pad(book.author(), AUTHOR_WIDTH),
        pad(book.isbn(), ISBN_WIDTH),
        book.copies()
    )
}

pub(super) fn print_books(books: &[Book]) {
    if books.is_empty() {
        return;
    }
    println!("{}", format_header().bold());
    for book in books {
        println!("{}", format_book(book));
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

pub(super) fn print_ingest_reports(reports: &[TaskReport]) {
    for report in reports {
        match (&report.outcome, &report.ingest) {
            (TaskOutcome::Success, Some(summary)) => {
                let line = format!(
                    "Ingested {}: {} added, {} rejected",
                    report.label,
                    summary.accepted,
                    summary.rejected.len() + summary.failed_adds
                );
                println!("{}", line.dimmed());
            }
            (TaskOutcome::Failure { detail, .. }, _) => {
                print_error(&format!("reading {}: {}", report.label, detail));
            }
            (TaskOutcome::Success, None) => {}
        }
    }
}

pub(super) fn print_operation_report(report: &TaskReport) {
    match &report.outcome {
        TaskOutcome::Success => {
            if let Some(result) = &report.result {
                print_books(&result.books);
                print_messages(&result.messages);
            }
        }
        TaskOutcome::Failure { detail, .. } => print_error(detail),
    }
}

pub(super) fn print_statistics(stats: &MetricsSnapshot) {
    println!();
    println!("--- Session Statistics ---");
    println!("Valid records processed: {}", stats.valid_records);
    println!("Search results found:    {}", stats.search_results);
    println!("Books added:             {}", stats.books_added);
    println!("Errors encountered:      {}", stats.errors);
}
