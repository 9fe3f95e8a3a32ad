//! svm-bridge command line interface
//!
//! Train, apply, and inspect models over libsvm-format data files.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use svm_bridge::core::{KernelType, Result, SVMError};
use svm_bridge::data::load_problem;
use svm_bridge::persistence::SerializableModel;
use svm_bridge::{evaluate, SVM};

#[derive(Parser)]
#[command(name = "svm-bridge")]
#[command(about = "Train and apply SVM models over libsvm-format data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new model
    Train(TrainArgs),
    /// Make predictions using a trained model
    Predict(PredictArgs),
    /// Evaluate a model on labeled test data
    Evaluate(EvaluateArgs),
    /// Display model information
    Info(InfoArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum CliKernel {
    /// Dot product kernel
    #[value(name = "linear")]
    Linear,
    /// Polynomial kernel
    #[value(name = "poly")]
    Polynomial,
    /// Radial basis function kernel
    #[value(name = "rbf")]
    Rbf,
    /// Sigmoid kernel
    #[value(name = "sigmoid")]
    Sigmoid,
}

impl From<CliKernel> for KernelType {
    fn from(cli_kernel: CliKernel) -> Self {
        match cli_kernel {
            CliKernel::Linear => KernelType::Linear,
            CliKernel::Polynomial => KernelType::Polynomial,
            CliKernel::Rbf => KernelType::Rbf,
            CliKernel::Sigmoid => KernelType::Sigmoid,
        }
    }
}

#[derive(Args)]
struct TrainArgs {
    /// Training data file (libsvm format)
    #[arg(long)]
    data: PathBuf,

    /// Output model file
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel type passed through to the solver
    #[arg(short, long, default_value = "linear")]
    kernel: CliKernel,

    /// Regularization parameter C
    #[arg(short = 'C', long, default_value = "1.0")]
    c: f64,

    /// Stopping tolerance
    #[arg(short, long, default_value = "0.001")]
    epsilon: f64,

    /// Kernel coefficient gamma (0 lets the solver choose)
    #[arg(short, long, default_value = "0.0")]
    gamma: f64,

    /// Polynomial degree
    #[arg(long, default_value = "3")]
    degree: u32,

    /// Independent kernel term coef0
    #[arg(long, default_value = "0.0")]
    coef0: f64,
}

#[derive(Args)]
struct PredictArgs {
    /// Trained model file
    #[arg(short, long)]
    model: PathBuf,

    /// Input data file (libsvm format; labels ignored)
    #[arg(long)]
    data: PathBuf,

    /// Output predictions file (optional, prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Trained model file
    #[arg(short, long)]
    model: PathBuf,

    /// Labeled test data file
    #[arg(long)]
    data: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// Model file
    model: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Train(args) => train_command(args),
        Commands::Predict(args) => predict_command(args),
        Commands::Evaluate(args) => evaluate_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn train_command(args: TrainArgs) -> Result<()> {
    info!("Training model...");
    info!("Data file: {:?}", args.data);
    info!(
        "Parameters: kernel={:?}, C={}, epsilon={}, gamma={}",
        args.kernel, args.c, args.epsilon, args.gamma
    );

    let problem = load_problem(&args.data)?;
    info!("Loaded {} training vectors", problem.len());

    let svm = SVM::new()
        .with_kernel(args.kernel.into())
        .with_c(args.c)
        .with_epsilon(args.epsilon)
        .with_gamma(args.gamma)
        .with_degree(args.degree)
        .with_coef0(args.coef0);
    let params = svm.params().clone();

    let model = svm.train(&problem)?;
    info!("Training completed successfully");

    let serializable = SerializableModel::from_model(&model, &params)?;
    serializable.save_to_file(&args.output)?;
    info!("Model saved to: {:?}", args.output);

    let accuracy = evaluate(&model, &problem)?;
    info!("Training accuracy: {:.2}%", accuracy * 100.0);

    Ok(())
}

fn predict_command(args: PredictArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let serializable = SerializableModel::load_from_file(&args.model)?;
    let model = serializable.to_model()?;

    info!("Loading prediction data from: {:?}", args.data);
    let problem = load_problem(&args.data)?;

    let mut predictions = Vec::with_capacity(problem.len());
    for vector in problem.vectors() {
        predictions.push(model.predict(&vector.nodes)?);
    }

    if let Some(output_path) = args.output {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        let file = File::create(&output_path).map_err(SVMError::Io)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "# Predictions for {} samples", predictions.len())
            .map_err(SVMError::Io)?;
        writeln!(writer, "# Format: sample_index predicted_label").map_err(SVMError::Io)?;
        for (i, label) in predictions.iter().enumerate() {
            writeln!(writer, "{i} {label}").map_err(SVMError::Io)?;
        }

        info!("Predictions saved to: {output_path:?}");
    } else {
        println!("# Predictions for {} samples", predictions.len());
        println!("# Format: sample_index predicted_label");
        for (i, label) in predictions.iter().enumerate() {
            println!("{i} {label}");
        }
    }

    Ok(())
}

fn evaluate_command(args: EvaluateArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let serializable = SerializableModel::load_from_file(&args.model)?;
    let model = serializable.to_model()?;

    info!("Loading test data from: {:?}", args.data);
    let problem = load_problem(&args.data)?;

    let accuracy = evaluate(&model, &problem)?;

    println!("=== Model Evaluation ===");
    serializable.print_summary();
    println!("\nTest Results:");
    println!("  Samples:  {}", problem.len());
    println!("  Accuracy: {:.2}%", accuracy * 100.0);

    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let serializable = SerializableModel::load_from_file(&args.model)?;

    serializable.print_summary();

    println!("\nClass labels:");
    for (label, centroid) in serializable
        .artifact
        .labels
        .iter()
        .zip(serializable.artifact.centroids.iter())
    {
        let preview: Vec<f64> = centroid.iter().copied().take(5).collect();
        println!("  {label}: centroid {preview:?}");
        if centroid.len() > 5 {
            println!("    ... ({} more)", centroid.len() - 5);
        }
    }

    Ok(())
}
