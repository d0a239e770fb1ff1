use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use brewery::drink::default_heat_source;
use brewery::{BreweryConfig, DrinkStateCodec, Identifier, ItemStack, RecipeMatcher};

#[derive(Parser, Debug)]
#[command(name = "brewery")]
#[command(about = "Resolve brewing recipes and inspect drink items")]
struct Args {
    /// Path to the recipe configuration file
    #[arg(short, long, default_value = "demos/brewery.toml")]
    config: String,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered recipes in registry order
    Recipes,

    /// Find the recipes an ingredient bag brews
    Match {
        /// Barrel the brew ages in (omit for no barrel)
        #[arg(short, long)]
        barrel: Option<Identifier>,

        /// Heat source under the cauldron
        #[arg(long, default_value = "minecraft:fire")]
        heat: Identifier,

        /// Ingredients as KIND=COUNT, in bag order
        #[arg(required = true, value_parser = parse_ingredient)]
        ingredients: Vec<ItemStack>,
    },

    /// Decode the drink state of an item stored as JSON
    Inspect {
        /// Path to the item JSON
        item: String,
    },

    /// Print a freshly brewed drink item as JSON
    Create {
        /// Recipe id
        drink_type: Identifier,

        #[arg(long, default_value_t = 0)]
        age: i32,

        #[arg(long, default_value_t = 0.0)]
        quality: f64,

        #[arg(long, default_value_t = 0)]
        distilled: u32,

        #[arg(long)]
        heat: Option<Identifier>,
    },
}

fn parse_ingredient(s: &str) -> Result<ItemStack, String> {
    let (kind, count) = match s.rsplit_once('=') {
        Some((kind, count)) => {
            let count = count
                .parse::<u32>()
                .map_err(|e| format!("bad count in {s:?}: {e}"))?;
            (kind, count)
        }
        None => (s, 1),
    };
    let kind = Identifier::try_parse(kind).ok_or_else(|| format!("bad item kind {kind:?}"))?;
    Ok(ItemStack::new(kind, count))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = match args.verbose {
        0 => "brewery=info",
        1 => "brewery=debug",
        _ => "brewery=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = BreweryConfig::from_file(&args.config)
        .with_context(|| format!("loading {}", args.config))?;
    let registry = config.build_registry()?;
    let codec = DrinkStateCodec::new(&registry, &config.items);

    match args.command {
        Command::Recipes => {
            for recipe in registry.all_recipes() {
                println!("{}\t{}", recipe.id, recipe.display_name());
                for barrel in &recipe.barrels {
                    println!(
                        "\tbarrel {}: quality x{}, revealed after {}s",
                        barrel.barrel_type, barrel.quality_multiplier, barrel.reveal_age_seconds
                    );
                }
            }
        }
        Command::Match {
            barrel,
            heat,
            ingredients,
        } => {
            let matcher = RecipeMatcher::new(&registry);
            let found = matcher.find_types(&ingredients, barrel.as_ref(), &heat);
            if found.is_empty() {
                info!("No recipe matches these ingredients");
            }
            for recipe in found {
                println!("{}\t{}", recipe.id, recipe.display_name());
            }
        }
        Command::Inspect { item } => {
            let content = std::fs::read_to_string(&item).with_context(|| format!("reading {item}"))?;
            let stack = ItemStack::from_json(&content)?;
            let state = codec.read_state(&stack);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::Create {
            drink_type,
            age,
            quality,
            distilled,
            heat,
        } => {
            if registry.get(&drink_type).is_none() {
                warn!("{} is not a registered recipe", drink_type);
            }
            let heat = heat.unwrap_or_else(default_heat_source);
            let stack = codec.create_drink(&drink_type, age, quality, distilled, &heat);
            println!("{}", stack.to_json()?);
        }
    }

    Ok(())
}
