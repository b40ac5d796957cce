//! Reference country table command.

use anyhow::Result;
use vendora_listing::countries::{gst_rate_for, reference_countries};

use super::CountriesArgs;
use crate::context::Context;

/// Run the countries command.
pub fn run(args: CountriesArgs, ctx: &Context) -> Result<()> {
    if let Some(code) = args.code {
        return show_country(&code, ctx);
    }

    list_countries(ctx)
}

fn list_countries(ctx: &Context) -> Result<()> {
    ctx.output.header("Reference Countries");

    let entries: Vec<CountryInfo> = reference_countries()
        .iter()
        .map(|country| CountryInfo {
            code: country.code.clone(),
            name: country.name.clone(),
            currency: country.currency.clone(),
            gst_percent: gst_rate_for(&country.code),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    // Print table header
    ctx.output
        .table_row(&["CODE", "NAME", "CURRENCY", "GST %"], &[6, 24, 10, 8]);
    ctx.output.info(&"-".repeat(52));

    for entry in &entries {
        let gst = entry
            .gst_percent
            .map(|rate| rate.to_string())
            .unwrap_or_else(|| "-".to_string());

        ctx.output.table_row(
            &[&entry.code, &entry.name, &entry.currency, &gst],
            &[6, 24, 10, 8],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} countries", entries.len()));

    Ok(())
}

fn show_country(code: &str, ctx: &Context) -> Result<()> {
    let code = code.trim().to_uppercase();
    let countries = reference_countries();

    let Some(country) = countries.iter().find(|c| c.code == code) else {
        ctx.output.warn(&format!(
            "Country '{}' is not in the reference list; listings there use the default GST rate of {}%",
            code, ctx.config.platform.default_gst_percent
        ));
        return Ok(());
    };

    let info = CountryInfo {
        code: country.code.clone(),
        name: country.name.clone(),
        currency: country.currency.clone(),
        gst_percent: gst_rate_for(&country.code),
    };

    if ctx.output.is_json() {
        ctx.output.json(&info);
        return Ok(());
    }

    ctx.output.header(&format!("Country: {}", country.name));
    ctx.output.kv("Code", &info.code);
    ctx.output.kv("Currency", &info.currency);
    match info.gst_percent {
        Some(rate) => ctx.output.kv("GST rate", &format!("{}%", rate)),
        None => ctx.output.kv(
            "GST rate",
            &format!("{}% (platform default)", ctx.config.platform.default_gst_percent),
        ),
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct CountryInfo {
    code: String,
    name: String,
    currency: String,
    gst_percent: Option<f64>,
}
