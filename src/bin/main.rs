use async_trait::async_trait;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use gloss_core::error::RendererError;
use gloss_core::playback::preload::FileAssetProbe;
use gloss_core::{AssetLocator, AssetProbe, GlossEngine, PlayerConfig, Renderer, RendererStatus, SignSession};
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "player.json";
const SNAPSHOT_PATH: &str = "lexicon.bin";
const FRAME_TIME: Duration = Duration::from_millis(700);

const READY: u8 = 0;
const PLAYING: u8 = 1;
const INVALID: u8 = 2;

/// Stands in for the avatar: prints each asset and stays busy for a moment.
struct ConsoleRenderer {
    asset_dir: PathBuf,
    extension: String,
    state: AtomicU8,
}

impl ConsoleRenderer {
    fn new(config: &PlayerConfig) -> Self {
        Self {
            asset_dir: PathBuf::from(&config.asset_dir),
            extension: config.asset_extension.clone(),
            state: AtomicU8::new(READY),
        }
    }
}

#[async_trait]
impl Renderer for ConsoleRenderer {
    async fn initialize(&self) -> Result<(), RendererError> {
        if !self.asset_dir.is_dir() {
            tracing::warn!(dir = %self.asset_dir.display(), "asset directory not found, gestures will be reported invalid");
        }
        Ok(())
    }

    async fn play_asset(&self, locator: &AssetLocator) -> Result<(), RendererError> {
        let path = locator.file_path(&self.asset_dir, &self.extension);
        if tokio::fs::metadata(&path).await.is_err() {
            println!("  {} {}", "✗".red(), locator.as_str().dim());
            self.state.store(INVALID, Ordering::SeqCst);
            return Ok(());
        }
        println!("  {} {}", "▶".green(), locator.as_str().bold());
        self.state.store(PLAYING, Ordering::SeqCst);
        tokio::time::sleep(FRAME_TIME).await;
        let _ = self.state.compare_exchange(PLAYING, READY, Ordering::SeqCst, Ordering::SeqCst);
        Ok(())
    }

    fn abort(&self) {
        self.state.store(READY, Ordering::SeqCst);
    }

    fn status(&self) -> RendererStatus {
        match self.state.load(Ordering::SeqCst) {
            PLAYING => RendererStatus::Playing,
            INVALID => RendererStatus::Invalid,
            _ => RendererStatus::Ready,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_PATH.to_string());
    let config = PlayerConfig::load(Path::new(&config_path))?;

    let engine = GlossEngine::from_snapshot_or_builtin(Path::new(SNAPSHOT_PATH));
    let renderer = Arc::new(ConsoleRenderer::new(&config));
    let probe = Arc::new(FileAssetProbe::new(&config.asset_dir, config.asset_extension.clone()));
    let mut session = SignSession::new(engine, renderer, probe, &config);

    print_banner()?;
    if let Err(e) = session.initialize().await {
        eprintln!("{} {}", "[ERROR]".red(), e);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt(&session)?;
        let Some(line) = lines.next_line().await? else { break };
        let cmd = line.trim();

        match cmd {
            "exit" => break,
            "" => {}
            ":stop" => session.stop(),
            ":notice" => match session.notice() {
                Some(message) => println!("{}", message.yellow()),
                None => println!("No notice."),
            },
            ":clear" => {
                session.clear_notice();
                print_banner()?;
            }
            s if s.starts_with(":play ") => match session.play_single(&s[":play ".len()..]) {
                Ok(gesture) => println!("Playing {}", gesture.as_str().bold()),
                Err(e) => println!("{} {}", "[!]".red(), e),
            },
            s if s.starts_with(":search ") => {
                let query = s[":search ".len()..].trim();
                let hits = session.engine().lexicon().search(query, None);
                if hits.is_empty() {
                    println!("No dataset entries match '{}'.", query);
                }
                for entry in hits {
                    println!("  {:<16} -> {:<16} ({})", entry.word, entry.sign, entry.category);
                }
            }
            text => match session.submit_text(text) {
                Ok(translation) => {
                    println!("Signing: {}", translation.display.join(" ").cyan());
                    if !translation.unresolved.is_empty() {
                        println!("No sign for: {}", translation.unresolved.join(", ").dim());
                    }
                }
                Err(e) => println!("{} {}", "[!]".red(), e),
            },
        }
    }

    session.dispose();
    if !Path::new(SNAPSHOT_PATH).exists() {
        println!("\nSaving lexicon snapshot...");
        if let Err(e) = session.engine().save_lexicon(Path::new(SNAPSHOT_PATH)) {
            eprintln!("{} Could not save lexicon: {}", "[ERROR]".red(), e);
        }
    }
    Ok(())
}

fn print_banner() -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "ISL Gloss Player".bold());
    println!("---------------------------------------------------------------");
    println!("Type a sentence to sign it. ':play <sign>', ':search <word>',");
    println!("':stop', ':notice', ':clear'. 'exit' to quit.\n");
    Ok(())
}

fn print_prompt<R: Renderer + 'static, P: AssetProbe + 'static>(session: &SignSession<R, P>) -> std::io::Result<()> {
    let snapshot = session.snapshot();
    let preload = session.preload_report();
    print!(
        "[{} | preload {}%] > ",
        snapshot.message.to_string().dim(),
        preload.progress_percent()
    );
    stdout().flush()
}
