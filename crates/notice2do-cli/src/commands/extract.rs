//! Extract command implementation.

use super::{usable_due_dates, write_calendar};
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use notice2do_calendar::to_calendar;
use notice2do_domain::{NoticeRecord, StructuredGenerator};
use notice2do_extractor::{guard_input, Extractor};
use notice2do_llm::OpenAiProvider;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_notice(&args)?;
    guard_input(&text, config.extractor.min_input_chars)?;

    let provider = OpenAiProvider::new(config.backend.model.as_str())
        .with_endpoint(config.backend.endpoint.as_str());
    let extractor = Extractor::new(provider, config.extractor.clone());

    let credential = config.resolve_credential();
    let zone = args.zone.as_deref().unwrap_or(&config.settings.zone_id);

    let (record, ics) = extract_and_encode(&extractor, &text, credential.as_deref(), zone).await?;

    println!("{}", formatter.format_record(&record)?);

    if let Some(path) = &args.save_record {
        fs::write(path, serde_json::to_string_pretty(&record)?)?;
        eprintln!("{}", formatter.info(&format!("Record saved to {}", path.display())));
    }

    if !args.no_ics {
        write_calendar(&args.ics, &ics)?;
        eprintln!(
            "{}",
            formatter.calendar_written(&args.ics, usable_due_dates(&record.tasks), record.tasks.len())
        );
    }

    Ok(())
}

/// Run one extraction and encode its tasks.
pub async fn extract_and_encode<G>(
    extractor: &Extractor<G>,
    text: &str,
    credential: Option<&str>,
    zone_id: &str,
) -> Result<(NoticeRecord, String)>
where
    G: StructuredGenerator + Send + Sync + 'static,
    G::Error: std::fmt::Display,
{
    let record = extractor.extract(text, credential).await?;
    let ics = to_calendar(&record.tasks, zone_id);
    info!("Encoded calendar for '{}' in zone {}", record.title, zone_id);
    Ok((record, ics))
}

/// Read the notice from the selected source.
fn read_notice(args: &ExtractArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(path) = &args.file {
        read_notice_file(path)
    } else if let Some(text) = &args.text {
        Ok(text.clone())
    } else {
        Err(CliError::InvalidInput(
            "Must specify one of --file, --stdin or --text".to_string(),
        ))
    }
}

/// Read a notice file, extracting the text layer of PDFs.
fn read_notice_file(path: &Path) -> Result<String> {
    if is_pdf(path) {
        let text = read_pdf(path)?;
        debug!("PDF text extracted: {} chars", text.chars().count());
        return Ok(text);
    }
    Ok(fs::read_to_string(path)?)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path).map_err(|e| {
        CliError::InvalidInput(format!(
            "Failed to extract text from PDF {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(text.trim().to_string())
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Path) -> Result<String> {
    Err(CliError::InvalidInput(format!(
        "{} is a PDF; this build reads text input only (enable the `pdf` feature)",
        path.display()
    )))
}
