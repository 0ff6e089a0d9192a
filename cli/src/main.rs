//! deckplan CLI - deck migration planning tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use deckplan::{
    cookbook, diagnose, model, AssignOptions, BrandConfig, ClassifierOptions, ContentDocument,
    ContentType, JsonFormat, LegacySlide, Planner, Severity, SlideCatalog,
};

#[derive(Parser)]
#[command(name = "deckplan")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Classify deck content, diagnose templates and plan slide layouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify extracted slide records into content.json
    Classify {
        /// Slide records (JSON array, or an object with a "slides" array)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (outline on stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Source presentation recorded in the metadata
        #[arg(long, value_name = "PATH")]
        source: Option<String>,

        /// Classify slides one at a time
        #[arg(long)]
        sequential: bool,

        /// Print the document as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Validate a content.json file
    Validate {
        /// content.json file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Check a template for the shapes each content type needs
    Diagnose {
        /// Template presentation
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Brand configuration with a slide catalog
        #[arg(short, long, value_name = "FILE", env = "DECKPLAN_CONFIG")]
        config: Option<PathBuf>,

        /// Fail on warnings as well as errors
        #[arg(long)]
        strict: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assign every slide a template slot or a cookbook recipe
    Plan {
        /// content.json file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Brand configuration with a slide catalog
        #[arg(short, long, value_name = "FILE", env = "DECKPLAN_CONFIG")]
        config: Option<PathBuf>,

        /// Template presentation to diagnose and take slot geometry from
        #[arg(short, long, value_name = "TEMPLATE")]
        template: Option<PathBuf>,

        /// Place every slide with a cookbook recipe
        #[arg(long)]
        use_cookbook: bool,

        /// Allow the same slot or recipe on consecutive slides
        #[arg(long)]
        no_variety: bool,

        /// Output file for the plan (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List cookbook recipes
    Recipes {
        /// Only recipes designed for this content type
        #[arg(long, value_name = "TYPE")]
        content_type: Option<String>,

        /// Output recipes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    if let Err(e) = cookbook::verify_complete() {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Classify {
            input,
            output,
            source,
            sequential,
            json,
        }) => cmd_classify(&input, output.as_deref(), source, sequential, json),
        Some(Commands::Validate { input }) => cmd_validate(&input),
        Some(Commands::Diagnose {
            template,
            config,
            strict,
            json,
        }) => cmd_diagnose(&template, config.as_deref(), strict, json),
        Some(Commands::Plan {
            input,
            config,
            template,
            use_cookbook,
            no_variety,
            output,
            json,
        }) => cmd_plan(
            &input,
            config.as_deref(),
            template.as_deref(),
            AssignOptions::new()
                .with_cookbook(use_cookbook)
                .with_variety(!no_variety),
            output.as_deref(),
            json,
        ),
        Some(Commands::Recipes { content_type, json }) => {
            cmd_recipes(content_type.as_deref(), json)
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: deckplan <COMMAND>".yellow());
            println!("       deckplan --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_records(input: &Path) -> Result<Vec<LegacySlide>, Box<dyn std::error::Error>> {
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(input)?)?;
    let slides = match value {
        serde_json::Value::Object(mut map) => map
            .remove("slides")
            .ok_or("expected an array of slide records or an object with \"slides\"")?,
        other => other,
    };
    Ok(serde_json::from_value(slides)?)
}

fn load_catalog(config: Option<&Path>) -> Result<SlideCatalog, Box<dyn std::error::Error>> {
    match config {
        Some(path) => {
            let config = BrandConfig::from_file(path)?;
            log::debug!(
                "brand '{}': {} cataloged content types",
                config.name,
                config.slide_catalog.len()
            );
            Ok(config.slide_catalog)
        }
        None => Ok(SlideCatalog::new()),
    }
}

fn cmd_classify(
    input: &Path,
    output: Option<&Path>,
    source: Option<String>,
    sequential: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = read_records(input)?;
    if records.is_empty() {
        return Err("no slide records in input".into());
    }

    let source = source.unwrap_or_else(|| input.display().to_string());
    let format = Path::new(&source)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    let options = ClassifierOptions::new().with_parallel(!sequential);
    let doc = deckplan::Classifier::new(options).classify_records(records, &source, &format);
    doc.ensure_valid()?;

    if let Some(path) = output {
        doc.save(path)?;
        println!(
            "{} {} ({} slides)",
            "Saved to".green(),
            path.display(),
            doc.slide_count()
        );
    } else if json {
        println!("{}", doc.to_json(JsonFormat::Pretty)?);
    } else {
        println!("{}", deckplan::to_outline(&doc));
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let problems = model::validate_content_json(input);
    if problems.is_empty() {
        println!("{} {}", "Valid".green().bold(), input.display());
        return Ok(());
    }

    println!("{} {}", "Invalid".red().bold(), input.display());
    for problem in &problems {
        println!("  {} {}", "-".dimmed(), problem);
    }
    Err(format!("{} problem(s) found", problems.len()).into())
}

fn cmd_diagnose(
    template: &Path,
    config: Option<&Path>,
    strict: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match config {
        Some(_) => Some(load_catalog(config)?),
        None => None,
    };
    let report = diagnose::diagnose_path(template, catalog.as_ref());

    if json {
        println!("{}", report.to_json(JsonFormat::Pretty)?);
    } else {
        print_report(&report);
    }

    if report.is_blocking(strict) {
        return Err("template has blocking issues".into());
    }
    Ok(())
}

fn print_report(report: &deckplan::DiagnosticReport) {
    println!("{}", "Template Diagnostics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "{}: {}  {}: {}  {}: {}",
        "Slides".bold(),
        report.slide_count,
        "Layouts".bold(),
        report.layout_count,
        "Masters".bold(),
        report.master_count
    );
    println!();

    for issue in &report.issues {
        let code = match issue.severity {
            Severity::Error => issue.code.as_str().red().bold(),
            Severity::Warning => issue.code.as_str().yellow().bold(),
            Severity::Info => issue.code.as_str().blue(),
        };
        println!("{} {}", code, issue.message);
        if !issue.detail.is_empty() {
            println!("         {}", issue.detail.dimmed());
        }
    }

    println!();
    let summary = format!(
        "{} errors, {} warnings, {} info",
        report.errors().len(),
        report.warnings().len(),
        report.infos().len()
    );
    if report.has_blocking_issues() {
        println!("{}", summary.red());
    } else {
        println!("{}", summary.green());
    }
}

fn cmd_plan(
    input: &Path,
    config: Option<&Path>,
    template: Option<&Path>,
    options: AssignOptions,
    output: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = ContentDocument::load(input)?;
    let planner = Planner::new()
        .with_catalog(load_catalog(config)?)
        .with_assign_options(options);

    let outcome = match template {
        Some(template) => planner.plan_with_template(&mut doc, template)?,
        None => planner.plan(&mut doc)?,
    };

    if outcome.report.has_blocking_issues() {
        eprintln!(
            "{} template has blocking issues; all slides use cookbook recipes",
            "Warning".yellow().bold()
        );
    }

    let text = if json {
        outcome.plan.to_json(JsonFormat::Pretty)?
    } else {
        outcome.plan.to_string()
    };

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_recipes(content_type: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let recipes = match content_type {
        Some(name) => {
            let content_type: ContentType = name.parse()?;
            cookbook::recipes_for(content_type)
        }
        None => cookbook::cookbook().recipes().iter().collect(),
    };

    if json {
        println!("{}", deckplan::render::to_json(&recipes, JsonFormat::Pretty)?);
        return Ok(());
    }

    for recipe in recipes {
        let types: Vec<&str> = recipe.content_types.iter().map(|t| t.as_str()).collect();
        println!("{:<22} {}", recipe.name.cyan().bold(), recipe.description);
        println!("{:<22} {}", "", types.join(", ").dimmed());
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "deckplan".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Deck migration planning tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/deckplan".dimmed());
    println!("License: MIT");
}
