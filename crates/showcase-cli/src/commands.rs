//! Command handlers

use crate::cli::{Cli, CompareAction, Commands};
use crate::output::{
    print_json, render_categories, render_comparison, render_notice, render_recommendation,
    render_vehicle_detail, render_vehicle_table,
};
use chrono::Utc;
use serde_json::json;
use showcase_advisor::RecommendationState;
use showcase_app::app::{categories, compare_selection, run_recommendation, ComparisonList, ToastQueue};
use showcase_app::config::Config;
use showcase_app::export::export_comparison;
use showcase_app::repository::{open_catalog, open_selection_store};
use showcase_domain::model::{Catalog, VehicleFilter};
use showcase_store::KeyValueStore;
use showcase_types::{Error, FuelType, OutputFormat, Result, VehicleType};
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog.clone();
    }
    if cli.storage_dir.is_some() {
        config.storage_dir = cli.storage_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::List {
            search,
            vehicle_type,
            brand,
            fuel,
            max_price,
        } => {
            let catalog = open_catalog(&config)?;
            cmd_list(&catalog, output_format, search, vehicle_type, brand, fuel, max_price)
        }

        Commands::Show { id } => {
            let catalog = open_catalog(&config)?;
            cmd_show(&catalog, output_format, &id)
        }

        Commands::Categories => {
            let catalog = open_catalog(&config)?;
            let summaries = categories(&catalog);
            match output_format {
                OutputFormat::Json => print_json(&summaries),
                OutputFormat::Table => {
                    print!("{}", render_categories(&summaries));
                    Ok(())
                }
            }
        }

        Commands::Compare { action } => {
            let catalog = open_catalog(&config)?;
            cmd_compare(&config, &catalog, output_format, action)
        }

        Commands::Recommend { preferences } => {
            let catalog = open_catalog(&config)?;
            cmd_recommend(&config, &catalog, output_format, &preferences.join(" "))
        }

        Commands::Config {
            show,
            set_advisor_command,
            set_model,
            set_catalog,
            set_storage_dir,
            set_output,
            set_toast_secs,
            reset,
        } => cmd_config(
            show,
            set_advisor_command,
            set_model,
            set_catalog,
            set_storage_dir,
            set_output,
            set_toast_secs,
            reset,
        ),
    }
}

fn cmd_list(
    catalog: &Catalog,
    output_format: OutputFormat,
    search: Option<String>,
    vehicle_type: Option<VehicleType>,
    brand: Option<String>,
    fuel: Option<FuelType>,
    max_price: Option<f64>,
) -> Result<()> {
    let filter = VehicleFilter {
        search: search.unwrap_or_default(),
        vehicle_type,
        brand,
        fuel_type: fuel,
        max_price,
    };
    tracing::debug!(?filter, "filtering catalog");

    let vehicles = catalog.filter(&filter);
    match output_format {
        OutputFormat::Json => print_json(&vehicles),
        OutputFormat::Table => {
            print!("{}", render_vehicle_table(&vehicles));
            Ok(())
        }
    }
}

fn cmd_show(catalog: &Catalog, output_format: OutputFormat, id: &str) -> Result<()> {
    let vehicle = catalog
        .find(id)
        .ok_or_else(|| Error::VehicleNotFound(id.to_string()))?;

    match output_format {
        OutputFormat::Json => print_json(vehicle),
        OutputFormat::Table => {
            print!("{}", render_vehicle_detail(vehicle));
            Ok(())
        }
    }
}

fn cmd_compare(config: &Config, catalog: &Catalog, output_format: OutputFormat, action: CompareAction) -> Result<()> {
    let store = open_selection_store(config);
    let toasts = ToastQueue::new(config.toast_dismiss_after());
    let mut list = ComparisonList::load(store, toasts);

    match action {
        CompareAction::Add { id } => {
            // Only catalog vehicles can be selected
            if catalog.find(&id).is_none() {
                return Err(Error::VehicleNotFound(id));
            }
            let outcome = list.add(&id);
            report_change(&list, output_format, json!({ "outcome": outcome }))
        }

        CompareAction::Remove { id } => {
            let removed = list.remove(&id);
            report_change(&list, output_format, json!({ "removed": removed }))
        }

        CompareAction::Clear => {
            let cleared = list.clear();
            if !cleared && output_format == OutputFormat::Table {
                println!("Comparison list is already empty");
            }
            report_change(&list, output_format, json!({ "cleared": cleared }))
        }

        CompareAction::Show { export } => cmd_compare_show(catalog, list.ids(), output_format, export),
    }
}

/// Print the active notice and resulting list after a mutation
fn report_change<S: KeyValueStore>(
    list: &ComparisonList<S, ToastQueue>,
    output_format: OutputFormat,
    mut body: serde_json::Value,
) -> Result<()> {
    let notices = list.notifier().active(Utc::now());

    match output_format {
        OutputFormat::Json => {
            body["ids"] = json!(list.ids());
            body["notices"] = json!(notices);
            print_json(&body)
        }
        OutputFormat::Table => {
            for notice in notices {
                print!("{}", render_notice(notice));
            }
            if list.is_empty() {
                println!("Comparison list: (empty)");
            } else {
                println!("Comparison list: {}", list.ids().join(", "));
            }
            Ok(())
        }
    }
}

fn cmd_compare_show(
    catalog: &Catalog,
    ids: &[String],
    output_format: OutputFormat,
    export: Option<PathBuf>,
) -> Result<()> {
    let view = compare_selection(catalog, ids);

    match output_format {
        OutputFormat::Json => print_json(&view)?,
        OutputFormat::Table => print!("{}", render_comparison(&view)),
    }

    if let Some(path) = export {
        export_comparison(&view, &path)?;
        eprintln!("Exported comparison to {}", path.display());
    }

    Ok(())
}

fn cmd_recommend(config: &Config, catalog: &Catalog, output_format: OutputFormat, preferences: &str) -> Result<()> {
    let state = run_recommendation(config, catalog, preferences)?;

    match output_format {
        OutputFormat::Json => print_json(&state)?,
        OutputFormat::Table => print!("{}", render_recommendation(&state)),
    }

    if let RecommendationState::Failure { reason } = state {
        return Err(Error::Recommendation(reason));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_advisor_command: Option<String>,
    set_model: Option<String>,
    set_catalog: Option<PathBuf>,
    set_storage_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_toast_secs: Option<u64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(command) = set_advisor_command {
        config.advisor_command = Some(command);
        modified = true;
    }

    if let Some(model) = set_model {
        config.model = Some(model);
        modified = true;
    }

    if let Some(path) = set_catalog {
        // Validate before persisting a catalog that cannot be read
        showcase_app::repository::open_catalog_at(path.clone())?;
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(dir) = set_storage_dir {
        config.storage_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(secs) = set_toast_secs {
        config.toast_dismiss_secs = secs;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
