use ::std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};
use clap::{Args, Parser, Subcommand};
use lingram::{
    generate, generate_with_rng, Classifier, ClassifierConfig, ContextTable, FrequencyModel,
    NgramSize, ProfileSetBuilder, DEFAULT_CONFIDENCE_THRESHOLD,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the language of a text
    Detect(DetectArgs),
    /// Make up words from a corpus
    Generate(GenerateArgs),
}

#[derive(Args)]
struct DetectArgs {
    /// Reference corpus as `NAME=PATH`, in tie-break order
    #[arg(short = 'p', long = "profile", required = true, value_parser = parse_profile)]
    profiles: Vec<(String, PathBuf)>,

    #[arg(short = 'n', long, default_value_t = 3, value_parser = parse_ngram_size)]
    ngram_size: usize,

    /// Distance below which the result is reported as certain
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    threshold: f64,

    /// Print the distance to every profile
    #[arg(long)]
    rank: bool,

    #[arg(short = 't', long, conflicts_with = "file", required_unless_present = "file")]
    text: Option<String>,

    #[arg(short = 'f', long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(short = 'c', long)]
    corpus: PathBuf,

    /// Number of words to make up
    #[arg(short = 'w', long, default_value_t = 30)]
    words: usize,

    /// Chars of context used to pick the next char
    #[arg(long, default_value_t = 2)]
    context: usize,

    #[arg(long)]
    seed: Option<u64>,
}

fn parse_profile(s: &str) -> Result<(String, PathBuf), String> {
    let Some((name, path)) = s.split_once('=') else {
        return Err(format!("expected NAME=PATH, got {s:?}"));
    };
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected NAME=PATH, got {s:?}"));
    }
    Ok((name.to_owned(), PathBuf::from(path)))
}

fn parse_ngram_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    NgramSize::try_from(n).map_err(|e| e.to_string())?;
    Ok(n)
}

fn open(path: &Path) -> lingram::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn read_lines(path: &Path) -> lingram::Result<Vec<String>> {
    let lines = open(path)?.lines().collect::<Result<_, _>>()?;
    Ok(lines)
}

fn detect(args: DetectArgs) -> lingram::Result<()> {
    let ngram_size = NgramSize::try_from(args.ngram_size)?;

    let mut builder = ProfileSetBuilder::new(ngram_size);
    for (name, path) in &args.profiles {
        info!("Loading profile {name} from {}", path.display());
        builder = builder.profile_lines(name.as_str(), read_lines(path)?);
    }
    let classifier = Classifier::with_config(
        builder.build(),
        ClassifierConfig::new().confidence_threshold(args.threshold),
    );

    let (input, unknown) = match (&args.text, &args.file) {
        (Some(text), _) => (text.clone(), FrequencyModel::from_text(text, ngram_size)),
        (None, Some(path)) => (
            path.display().to_string(),
            FrequencyModel::from_reader(open(path)?, ngram_size)?,
        ),
        (None, None) => unreachable!("clap requires --text or --file"),
    };

    if args.rank {
        for ranked in classifier.rank(&unknown)? {
            println!("{}\t{:.6}", ranked.language, ranked.distance);
        }
    }

    let result = classifier.classify(&unknown)?;
    println!(
        "The language of input: {input}\n {} {} with confidence: {:.6}",
        classifier.verdict(&result),
        result.language,
        result.confidence
    );

    Ok(())
}

fn make_up(args: GenerateArgs) -> lingram::Result<()> {
    info!("Reading corpus {}", args.corpus.display());
    let table = ContextTable::build(read_lines(&args.corpus)?, args.context);

    let text = match args.seed {
        Some(seed) => generate_with_rng(&table, args.words, &mut StdRng::seed_from_u64(seed)),
        None => generate(&table, args.words),
    };
    println!("{}", text.trim_end());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Detect(args) => detect(args),
        Commands::Generate(args) => make_up(args),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}
