use crate::cli::{EditArgs, ScoreArgs, SelectionArgs, ValidateArgs};
use crate::output::{write_edit_outcomes, write_score_json, write_score_report, write_validation, ScoreReport};
use qc_engine::config::AppConfig;
use qc_engine::error::AppError;
use qc_engine::ingest::{parse_clip_defects, write_profiles, IngestError, JsonFileProfileSource};
use qc_engine::profiles::{
    coerce_numeric_input, parse_measurement_type_input, parse_severity_input,
    validate_defect_references, validate_profiles, CategoryId, CheckId, Defect, EditOutcome,
    LanguageCode, LanguageConfig, Profile, ProfileId, ProfileRepository, ProfileSourceError,
    RepositorySettings, ValidationReport,
};
use qc_engine::review::{AssetReview, ReviewQueueOptions};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub(crate) fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let repository = repository_for(&config.repository, &args.selection)?;
    let clips = read_clips(&args.defects)?;
    let options = ReviewQueueOptions {
        pass_threshold: args
            .pass_threshold
            .unwrap_or(config.review.pass_threshold),
    };

    let report = score_report(&repository, clips, args.clip_count, options)?;
    let stdout = io::stdout().lock();
    if args.json {
        write_score_json(stdout, &report)?;
    } else {
        write_score_report(stdout, &report)?;
    }
    Ok(())
}

pub(crate) fn run_validate(config: &AppConfig, args: ValidateArgs) -> Result<(), AppError> {
    let repository = repository_for(&config.repository, &args.selection)?;
    let defects = match &args.defects {
        Some(path) => Some(read_clips(path)?.into_iter().flatten().collect::<Vec<_>>()),
        None => None,
    };

    let report = validation_report(&repository, defects.as_deref())?;
    write_validation(io::stdout().lock(), &report)?;
    report.into_result()?;
    Ok(())
}

pub(crate) fn run_edit(config: &AppConfig, args: EditArgs) -> Result<(), AppError> {
    let mut repository = repository_for(&config.repository, &args.selection)?;
    let outcomes = apply_edits(&mut repository, &args)?;
    write_edit_outcomes(io::stderr().lock(), &outcomes)?;

    match &args.out {
        Some(path) => {
            let file = File::create(path).map_err(|source| IngestError::Io {
                path: path.clone(),
                source,
            })?;
            write_profiles(BufWriter::new(file), repository.profiles())?;
            info!(path = %path.display(), profiles = repository.len(), "profile documents written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_profiles(&mut stdout, repository.profiles())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

pub(crate) fn run_template() -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    write_profiles(&mut stdout, &[Profile::template()])?;
    writeln!(stdout)?;
    Ok(())
}

/// Load profiles from `--profiles` (or the built-in template) and apply the selection flags.
pub(crate) fn repository_for(
    settings: &RepositorySettings,
    selection: &SelectionArgs,
) -> Result<ProfileRepository, AppError> {
    let mut repository = ProfileRepository::new(settings.clone());

    match &selection.profiles {
        Some(path) => {
            repository
                .reload_from(&JsonFileProfileSource::new(path))
                .map_err(|err| match err {
                    ProfileSourceError::Ingest(err) => AppError::Ingest(err),
                    other => AppError::Selection(other.to_string()),
                })?;
        }
        None => repository.load_profiles(vec![Profile::template()]),
    }

    if let Some(profile) = &selection.profile {
        repository.set_active_profile(ProfileId::from(profile.as_str()));
    }
    if let Some(product) = selection.product {
        repository.set_active_product(product);
    }
    if let Some(language) = &selection.language {
        repository.set_active_language(LanguageCode::from(language.as_str()));
    }

    Ok(repository)
}

/// Score `clips` against the active configuration, padding to `clip_count` clips.
pub(crate) fn score_report(
    repository: &ProfileRepository,
    mut clips: Vec<Vec<Defect>>,
    clip_count: Option<usize>,
    options: ReviewQueueOptions,
) -> Result<ScoreReport, AppError> {
    let language_config = resolved_config(repository)?;
    if let Some(count) = clip_count {
        if count > clips.len() {
            clips.resize_with(count, Vec::new);
        }
    }

    let review = AssetReview::from_clips(&clips, language_config, options);
    info!(
        clips = review.clips.len(),
        asset_score = review.asset_score,
        status = review.status.label(),
        queued = review.queue.len(),
        "asset scored"
    );

    Ok(ScoreReport::new(repository, review))
}

pub(crate) fn validation_report(
    repository: &ProfileRepository,
    defects: Option<&[Defect]>,
) -> Result<ValidationReport, AppError> {
    let mut report = validate_profiles(repository.profiles());
    if let Some(defects) = defects {
        let language_config = resolved_config(repository)?;
        report.merge(validate_defect_references(defects, language_config));
    }
    Ok(report)
}

/// Optional clone (activated when it lands), then each requested check edit in flag order.
pub(crate) fn apply_edits(
    repository: &mut ProfileRepository,
    args: &EditArgs,
) -> Result<Vec<(&'static str, EditOutcome)>, AppError> {
    let mut outcomes: Vec<(&'static str, EditOutcome)> = Vec::new();

    if let Some(new_id) = &args.clone_as {
        let source = repository
            .selection()
            .profile
            .clone()
            .ok_or_else(|| AppError::Selection("no active profile to clone".to_string()))?;
        let client = args.client.clone().unwrap_or_else(|| new_id.clone());
        let outcome = repository.clone_profile(&source, ProfileId::from(new_id.as_str()), &client);
        if outcome.is_applied() {
            repository.set_active_profile(ProfileId::from(new_id.as_str()));
        }
        outcomes.push(("clone", outcome));
    }

    let (Some(category), Some(check)) = (&args.category, &args.check) else {
        return Ok(outcomes);
    };
    let category = CategoryId::from(category.as_str());
    let check = CheckId::from(check.as_str());

    if let Some(enabled) = args.enabled {
        outcomes.push(("enabled", repository.set_check_enabled(&category, &check, enabled)));
    }
    if let Some(raw) = &args.severity {
        match parse_severity_input(raw) {
            Some(severity) => outcomes.push((
                "severity",
                repository.set_check_severity(&category, &check, severity),
            )),
            None => warn!(value = %raw, "severity must be ERROR, WARNING or INFO, skipped"),
        }
    }
    if let Some(raw) = &args.weight {
        let weight = coerce_numeric_input(raw);
        outcomes.push(("weight", repository.set_check_weight(&category, &check, weight)));
    }
    if let Some(raw) = &args.penalty {
        let penalty = coerce_numeric_input(raw);
        outcomes.push(("penalty", repository.set_check_penalty(&category, &check, penalty)));
    }
    if let Some(raw) = &args.measurement_type {
        match parse_measurement_type_input(raw) {
            Some(kind) => outcomes.push((
                "measurement_type",
                repository.set_check_measurement_type(&category, &check, kind),
            )),
            None => warn!(value = %raw, "unknown measurement type, skipped"),
        }
    }

    Ok(outcomes)
}

fn resolved_config(repository: &ProfileRepository) -> Result<&LanguageConfig, AppError> {
    repository.active_language_config().ok_or_else(|| {
        let selection = repository.selection();
        AppError::Selection(format!(
            "no configuration for profile {}, product {}, language {}",
            selection
                .profile
                .as_ref()
                .map(ProfileId::as_str)
                .unwrap_or("<none>"),
            selection.product.key(),
            selection.language
        ))
    })
}

fn read_clips(path: &Path) -> Result<Vec<Vec<Defect>>, AppError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_clip_defects(BufReader::new(file))?)
}
