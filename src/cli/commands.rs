use super::common::{print_error, print_info, print_success, CliContext};
use crate::data::models::Member;
use crate::data::{DataProvider, SampleData, SEGMENTS};
use crate::directory::{filter_members, SegmentFilter};
use crate::store;
use anyhow::{bail, Context, Result};
use tracing::info;

/// One row of `disruption members`
pub fn format_member_row(member: &Member) -> String {
    format!(
        "  {:<24} {:<20} {:<14} [{}]",
        member.name,
        member.company,
        member.segment,
        member.level.label()
    )
}

/// Members matching `search` and `segment`. Unknown segments are an error.
pub fn select_members(search: Option<&str>, segment: Option<&str>) -> Result<Vec<Member>> {
    let segment = SegmentFilter::parse(segment.unwrap_or("all"));
    if let SegmentFilter::Only(name) = &segment {
        if !SEGMENTS.contains(&name.as_str()) {
            bail!(
                "Unknown segment '{}'. Known segments: {}",
                name,
                SEGMENTS.join(", ")
            );
        }
    }
    let members = SampleData.list_members();
    Ok(filter_members(&members, search.unwrap_or(""), &segment)
        .into_iter()
        .cloned()
        .collect())
}

/// Print the filtered directory, as a table or as JSON
pub fn members(search: Option<&str>, segment: Option<&str>, json: bool) -> Result<()> {
    let found = match select_members(search, segment) {
        Ok(found) => found,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if json {
        let out = serde_json::to_string_pretty(&found).context("Failed to serialize members")?;
        println!("{}", out);
        return Ok(());
    }

    if found.is_empty() {
        print_info("No members found");
        return Ok(());
    }

    println!("Members ({}):", found.len());
    for member in &found {
        println!("{}", format_member_row(member));
    }
    Ok(())
}

pub fn reset_onboarding(ctx: &CliContext) -> Result<()> {
    let mut store = ctx.store();
    let was_completed = store::onboarding_completed(&store);
    store::reset_onboarding(&mut store)
        .with_context(|| format!("Failed to update {:?}", store.path()))?;

    if was_completed {
        info!("Onboarding flag cleared in {:?}", store.path());
        print_success("Onboarding will be shown again after the next login");
    } else {
        print_info("Onboarding was not completed yet, nothing to reset");
    }
    Ok(())
}

pub fn logs() {
    let log_file = crate::utils::get_log_dir().join(crate::utils::path::LOG_FILE_NAME);
    println!("Logs are written to: {}", log_file.display());
    println!("Follow them with: tail -f {:?}", log_file);
    println!("Raise verbosity with RUST_LOG=debug");
}
