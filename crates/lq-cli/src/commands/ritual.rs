use std::io::{self, BufRead, Write};
use std::sync::Arc;

use colored::Colorize;
use rand::Rng;

use lq_core::Corpus;
use lq_interpret::{InterpretationService, Interpreter};
use lq_ritual::{RitualConfig, RitualSession, ThrowOutcome};

pub async fn run(seed: Option<u64>, fast: bool) -> Result<(), String> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut config = RitualConfig::default().with_seed(seed);
    if fast {
        config = config.without_delays();
    }

    let corpus = Arc::new(Corpus::builtin().clone());
    let service = Arc::new(InterpretationService::new());
    let offline = !service.is_configured();
    let mut session = RitualSession::new(corpus, service, config);

    println!();
    println!("  {}", "观音灵签".yellow().bold());
    println!("  {}", "「 一方签文，千载智慧，照见古今人生路 」".dimmed());
    if offline {
        println!("  {}", "未配置生成后端，解签将使用内置签注。".dimmed());
    }
    println!();
    println!("  请阖目观想，心中默念所求之事。");
    pause("  按回车至诚求签 … ")?;

    println!("  {}", "签筒摇动，机缘感应中 …".yellow());
    session.start().await.map_err(|e| e.to_string())?;
    println!("  {}", "灵签已现，待圣杯确之".yellow());
    println!();

    let slip = session
        .slip()
        .cloned()
        .ok_or_else(|| "no slip emerged from the cylinder".to_string())?;
    super::print_slip(&slip);

    println!();
    println!("  {}", "掷筊确认 — 获得「圣杯」方可得其解。".bold());

    loop {
        pause("  按回车掷筊 … ")?;
        let outcome = session.throw().await.map_err(|e| e.to_string())?;
        match outcome {
            ThrowOutcome::Holy => {
                println!("  {}", "圣杯 · 阴阳和合，此签属尔".green());
                break;
            }
            ThrowOutcome::Smile => println!("  {}", "笑杯 · 心意未诚，请再掷一次".red()),
            ThrowOutcome::Yin => println!("  {}", "阴杯 · 时机未至，请再掷一次".red()),
            ThrowOutcome::Unthrown => {}
        }
    }

    println!();
    if let Some(reading) = session.interpretation() {
        super::print_reading(reading);
    }
    println!();
    println!("  {}", "功 德 圆 满".green().bold());

    Ok(())
}

/// Prompt and wait for a line. EOF counts as assent so piped input works.
fn pause(prompt: &str) -> Result<(), String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    Ok(())
}
