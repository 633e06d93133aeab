use crate::infra::load_guidance_services;
use chrono::{Local, Months, NaiveDate};
use clap::Args;
use mobility_ai::error::AppError;
use mobility_ai::guidance::culture::CultureGuide;
use mobility_ai::guidance::documents::{analyze_resume, check_passport_validity};
use mobility_ai::guidance::visa::{
    ApplicantProfile, EducationLevel, RecommendationRecord, TravelPurpose,
};
use mobility_ai::guidance::GuidanceServices;
use std::collections::BTreeMap;
use std::path::PathBuf;

const NOT_AVAILABLE: &str = "Not available";

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Destination country
    #[arg(long)]
    pub(crate) destination: String,
    /// Country of citizenship
    #[arg(long, default_value = "Other")]
    pub(crate) citizenship: String,
    /// Purpose of travel ("Work/Employment", "Study", "Business", "Tourism", ...)
    #[arg(long, default_value = "Tourism")]
    pub(crate) purpose: String,
    /// Highest education level ("High School", "Bachelor's Degree", ...)
    #[arg(long, default_value = "Other")]
    pub(crate) education: String,
    /// Years of work experience
    #[arg(long, default_value_t = 0)]
    pub(crate) experience_years: u32,
    /// Current or intended job title
    #[arg(long)]
    pub(crate) job_title: Option<String>,
    /// Reference data directory
    #[arg(long, default_value = "data")]
    pub(crate) data_dir: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference data directory
    #[arg(long, default_value = "data")]
    pub(crate) data_dir: PathBuf,
    /// Override the reporting date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let services = load_guidance_services(&args.data_dir)?;

    let profile = ApplicantProfile {
        citizenship: args.citizenship,
        destination: args.destination,
        purpose: TravelPurpose::from_label(&args.purpose),
        education: EducationLevel::from_label(&args.education),
        work_experience_years: args.experience_years,
        job_title: args.job_title,
    };

    print_recommendations(&services, &profile);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let services = load_guidance_services(&args.data_dir)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Global mobility guidance demo");

    let profile = ApplicantProfile {
        citizenship: "India".to_string(),
        destination: "United Kingdom".to_string(),
        purpose: TravelPurpose::Work,
        education: EducationLevel::Masters,
        work_experience_years: 8,
        job_title: Some("Software Engineer".to_string()),
    };

    println!(
        "\nProfile: {} -> {}, purpose {}, {} with {} years of experience",
        profile.citizenship,
        profile.destination,
        profile.purpose.label(),
        profile.education.label(),
        profile.work_experience_years
    );
    print_recommendations(&services, &profile);

    print_readiness(&services, "Skilled Worker");
    print_resume_analysis();
    print_passport_check(today);
    print_culture_briefing(&services.culture, &profile.destination);
    print_style_comparison(&services.culture, "United States", "Japan");

    Ok(())
}

fn print_recommendations(services: &GuidanceServices, profile: &ApplicantProfile) {
    let records = services.visa.recommend(profile);

    println!("\nRecommended visa options for {}", profile.destination);
    if records.is_empty() {
        println!("  No matching visa category for this destination and purpose.");
    }
    for (index, record) in records.iter().enumerate() {
        print_record(index + 1, record);
    }

    match services.visa.country_info(&profile.destination) {
        Some(info) => {
            println!("  Processing authority: {}", info.processing_authority);
            if !info.common_visas.is_empty() {
                println!("  Common visas: {}", info.common_visas.join(", "));
            }
            if !info.special_notes.is_empty() {
                println!("  Note: {}", info.special_notes);
            }
        }
        None => println!("  Country guidance: {NOT_AVAILABLE}"),
    }
}

fn print_record(rank: usize, record: &RecommendationRecord) {
    println!("  {rank}. {}", record.name);
    println!("     Processing time: {}", record.processing_time);
    println!("     Validity: {}", record.validity);
    println!(
        "     Eligibility score: {} (success rate {})",
        record.eligibility_score,
        record.success_rate.label()
    );
    for requirement in &record.requirements {
        println!("     - {requirement}");
    }
}

fn print_readiness(services: &GuidanceServices, visa_type: &str) {
    let requirements = services.documents.required_documents(visa_type);

    // Check off the essentials and leave the type-specific items open.
    let checked: BTreeMap<String, bool> = requirements
        .essential
        .iter()
        .map(|doc| (doc.to_string(), true))
        .collect();
    let report = services.documents.readiness(visa_type, &checked);

    println!("\nDocument readiness for a {visa_type} application");
    println!(
        "  {:.0}% complete ({}/{} documents) - {}",
        report.percentage,
        report.completed,
        report.total,
        report.level.label()
    );
    println!("  {}", report.level.message());
    for document in &report.missing {
        println!("  Missing: {document}");
    }
}

fn print_resume_analysis() {
    let sample = "Work experience: 8 years of backend engineering at Example Corp. \
                  Education: M.Sc. in Computer Science, State University. \
                  Skills: Rust, SQL, distributed systems. Contact: dev@example.com.";
    let analysis = analyze_resume(sample);

    println!("\nResume check (sample text)");
    println!("  Score: {}", analysis.score);
    for issue in &analysis.issues {
        println!("  Issue: {issue}");
    }
    for suggestion in &analysis.suggestions {
        println!("  Suggestion: {suggestion}");
    }
}

fn print_passport_check(today: NaiveDate) {
    let expires_on = today
        .checked_add_months(Months::new(4))
        .unwrap_or(today);
    let check = check_passport_validity(expires_on, today);

    println!("\nPassport check (expires {expires_on})");
    println!("  {} ({} months remaining)", check.message, check.months_remaining);
    if let Some(recommendation) = check.recommendation {
        println!("  Recommendation: {recommendation}");
    }
}

fn print_culture_briefing(culture: &CultureGuide, country: &str) {
    println!("\nCultural briefing: {country}");

    match culture.workplace_culture(country) {
        Some(workplace) if !workplace.is_empty() => {
            for (topic, detail) in workplace {
                println!("  {topic}: {detail}");
            }
        }
        _ => println!("  Workplace culture: {NOT_AVAILABLE}"),
    }

    println!("  Time zone: {}", culture.time_zone(country).unwrap_or(NOT_AVAILABLE));
    println!(
        "  Working hours: {}",
        culture.working_hours(country).unwrap_or(NOT_AVAILABLE)
    );

    for tip in culture.tips(country) {
        println!("  Tip: {tip}");
    }
}

fn print_style_comparison(culture: &CultureGuide, first: &str, second: &str) {
    let comparison = culture.compare_communication_styles(first, second);

    println!("\nCommunication styles: {first} vs {second}");
    for entry in [&comparison.first, &comparison.second] {
        match &entry.style {
            Some(style) => {
                let directness = style
                    .get("directness")
                    .map(String::as_str)
                    .unwrap_or(NOT_AVAILABLE);
                println!("  {}: {directness}", entry.country);
            }
            None => println!("  {}: {NOT_AVAILABLE}", entry.country),
        }
    }
}
