use std::io::Read;
use std::process::ExitCode;

use triagem::client::config::ClientConfig;
use triagem::client::models::screen::Screen;
use triagem::client::models::submission::{self, SubmissionInput};
use triagem::client::services::classify_service::ClassifyService;

const USAGE: &str = "usage: triagem-cli [--file <path> | <email text>]   (or pipe the text on stdin)";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();
    let config = ClientConfig::from_env();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = match args.first().map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            return Ok(ExitCode::SUCCESS);
        }
        Some("--file") => {
            let Some(path) = args.get(1) else {
                eprintln!("{}", USAGE);
                return Ok(ExitCode::FAILURE);
            };
            if !submission::has_supported_extension(path) {
                log::warn!("'{}' is not a .txt or .pdf file; the server may reject it", path);
            }
            let bytes = tokio::fs::read(path).await?;
            let name = std::path::Path::new(path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            SubmissionInput::from_form("", Some((name, bytes)))
        }
        Some(_) => SubmissionInput::from_form(&args.join(" "), None),
        None => {
            // No arguments: take the email text from stdin (piped use).
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            SubmissionInput::from_form(text.trim_end(), None)
        }
    };

    let Some(input) = input else {
        eprintln!("Please enter text or select a file.");
        return Ok(ExitCode::FAILURE);
    };

    let service = ClassifyService::new(&config)?;
    let screen = match service.classify(input).await {
        Ok(classification) => Screen::Success(classification),
        Err(e) => Screen::Failure(e),
    };
    let failed = matches!(screen, Screen::Failure(_));
    if let Some(panel) = screen.panel() {
        println!("Category:        {}", panel.categoria);
        println!("Subcategory:     {}", panel.sub_categoria);
        println!("Suggested reply: {}", panel.resposta);
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
