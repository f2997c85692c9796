use hyplab::compute::types::{Alternative, DatasetName, TestParameters, UserChoice};
use hyplab::compute::{
    DatasetRegistry, alternative_hypothesis, evaluate, histogram_description, judge,
    null_hypothesis,
};
use hyplab::config::LabConfig;
use hyplab::error::HyplabErr;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), HyplabErr> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry = DatasetRegistry::load(&LabConfig::from_env())?;

    for dataset in DatasetName::ALL {
        let profile = dataset.profile();
        println!("----------------------------------------");
        println!("{}: {}", profile.label, profile.description);

        for alternative in [Alternative::Less, Alternative::Greater, Alternative::TwoSided] {
            let params = TestParameters {
                alternative,
                ..TestParameters::for_dataset(dataset)
            };
            let result = evaluate(&registry, &params)?;
            println!();
            println!("H0: {}", null_hypothesis(dataset, params.hypothesised_mean));
            println!(
                "H1: {}",
                alternative_hypothesis(dataset, params.hypothesised_mean, alternative)
            );
            println!("P value: {}", result.p_value_text());
            println!("{}", result.bound_text());
            println!("{}", histogram_description(&result));
            println!(
                "Reject? {}",
                judge(result.p_value, params.confidence_level, UserChoice::Reject)?
            );
        }
    }
    Ok(())
}
