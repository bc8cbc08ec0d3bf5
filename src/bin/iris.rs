use rusty_id3::data::classes::ClassSet;
use rusty_id3::data::dataset::Dataset;
use rusty_id3::data::domain::FeatureDomain;
use rusty_id3::data::reader::read_classification_csv;
use rusty_id3::metrics::confusion::ClassificationMetrics;
use rusty_id3::trees::classifier::DecisionTreeClassifier;
use rusty_id3::TreeError;
use std::env;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const IRIS_CLASSES: [&str; 3] = ["Iris-setosa", "Iris-versicolor", "Iris-virginica"];
const TEST_SIZE: f64 = 0.25;
const USAGE: &str = "usage: iris <csv path> [seed] [max_depth] [min_sample_size]";

struct Args {
    file_path: String,
    seed: Option<u64>,
    max_depth: Option<u16>,
    min_sample_size: Option<usize>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let file_path = args.next().ok_or(USAGE)?;
    let seed: Option<u64> = args.next().map(|seed| seed.parse()).transpose()?;
    let max_depth: Option<u16> = args.next().map(|depth| depth.parse()).transpose()?;
    let min_sample_size: Option<usize> = args.next().map(|size| size.parse()).transpose()?;

    Ok(Args {
        file_path,
        seed,
        max_depth,
        min_sample_size,
    })
}

fn test_tree_classifier(
    dataset: &Dataset<f64>,
    train_dataset: &Dataset<f64>,
    test_dataset: &Dataset<f64>,
    args: &Args,
) -> Result<(), TreeError> {
    // Thresholds come from the whole dataset, not only the training rows.
    let domain = FeatureDomain::from_dataset(dataset);

    let mut classifier = DecisionTreeClassifier::with_params(args.max_depth, args.min_sample_size)?;
    info!("{}", classifier.fit(train_dataset, &domain)?);
    classifier.merge_identical_leaves()?;

    let predictions = classifier.predict_dataset(test_dataset)?;
    let accuracy = classifier.accuracy(test_dataset.y(), &predictions)?;
    let confusion = classifier.confusion_matrix(test_dataset.y(), &predictions)?;

    println!("----------------");
    println!("DECISION TREE");
    print!("{}", classifier.render()?);
    println!("----------------");
    info!("Confusion matrix (rows: true class, columns: predicted class):{}", confusion);

    println!("Accuracy on test set: {:.2}%", accuracy * 100.0);
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let classes = ClassSet::new(IRIS_CLASSES)?;
    let dataset: Dataset<f64> = read_classification_csv(&args.file_path, &classes)?;

    if !dataset.is_not_empty() {
        println!("Dataset is empty!");
        return Err(TreeError::EmptyDataset.into());
    }

    let (train_dataset, test_dataset) = dataset.train_test_split(TEST_SIZE, args.seed)?;

    println!("Total dataset size: {}", dataset.nrows());
    println!("Training set size: {}", train_dataset.nrows());
    println!("Test set size: {}", test_dataset.nrows());

    test_tree_classifier(&dataset, &train_dataset, &test_dataset, args)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
