use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;
use tokio::sync::mpsc;

use recipe_steps::{
    analyze_recipe, format_clock, load_config, scale_quantity, shopping_list, to_markdown,
    ChannelSignal, Recipe, StepsError, TimerDriver, TimerEngine, TimerEvent,
};

#[derive(Debug, Parser)]
#[command(name = "recipe-steps", version, about = "Cook times, timers and scaled ingredients for recipes")]
struct Cli {
    /// Configuration file (defaults to ./recipe-steps.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show label, cook time and hints for every step of a recipe
    Steps {
        /// Recipe JSON file
        recipe: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the shopping list scaled to a number of servings
    Shopping {
        recipe: PathBuf,
        #[arg(long, short)]
        servings: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Render a recipe as Markdown
    Export { recipe: PathBuf },
    /// Scale a single quantity token such as "200 g"
    Scale {
        token: String,
        #[arg(long, short)]
        servings: u32,
    },
    /// Run a countdown in the terminal until it expires or Ctrl-C
    Timer {
        minutes: u32,
        #[arg(long, default_value = "Timer")]
        label: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_config(cli.config.as_deref())?;
    debug!("{:#?}", settings);

    match cli.command {
        Command::Steps { recipe, json } => {
            let recipe = Recipe::load(&recipe)?;
            let steps = analyze_recipe(&recipe, &settings);
            if json {
                println!("{}", serde_json::to_string_pretty(&steps)?);
                return Ok(());
            }
            for step in steps {
                let time = step
                    .duration_minutes
                    .map(|m| format!(" [{} min]", m))
                    .unwrap_or_default();
                println!("{}. {}{}", step.index, step.label, time);
                println!("   {}", step.body);
                if step.suggest_parallel_work {
                    println!("   (prepare the next step meanwhile)");
                }
            }
        }
        Command::Shopping {
            recipe,
            servings,
            json,
        } => {
            let recipe = Recipe::load(&recipe)?;
            let servings = servings.unwrap_or(settings.servings.default);
            let items = shopping_list(&recipe.ingredients, servings);
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
                return Ok(());
            }
            for item in items {
                match item.quantity {
                    Some(q) => println!("{:<12} {} ({})", q, item.name, item.aisle.key()),
                    None => println!("{:<12} {} ({})", "", item.name, item.aisle.key()),
                }
            }
        }
        Command::Export { recipe } => {
            let recipe = Recipe::load(&recipe)?;
            print!("{}", to_markdown(&recipe));
        }
        Command::Scale { token, servings } => {
            println!("{}", scale_quantity(&token, servings.max(1)));
        }
        Command::Timer { minutes, label } => {
            if label.trim().is_empty() {
                return Err(StepsError::InvalidInput("Timer label cannot be empty".into()).into());
            }
            run_timer(minutes, &label, settings.timers.tick_interval()).await;
        }
    }

    Ok(())
}

async fn run_timer(minutes: u32, label: &str, period: std::time::Duration) {
    let (tx, mut events) = mpsc::unbounded_channel();
    let driver = TimerDriver::spawn(TimerEngine::with_signal(ChannelSignal::new(tx)), period);
    let timers = driver.handle();

    timers.start(minutes, label);
    timers.toggle(label);
    info!("Started '{}' for {} minutes", label, minutes);

    let mut display = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                println!("Stopped.");
                break;
            }
            Some(event) = events.recv() => {
                if let TimerEvent::Expired { label } = event {
                    println!("\r{}: 00:00 - done!", label);
                    break;
                }
            }
            _ = display.tick() => {
                if let Some(timer) = timers.get(label) {
                    print!("\r{}: {}   ", timer.label, format_clock(timer.remaining_seconds));
                    let _ = std::io::Write::flush(&mut std::io::stdout());
                }
            }
        }
    }

    driver.shutdown().await;
}
