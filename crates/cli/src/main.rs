mod settings;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use moodwatch_core::detection::infrastructure::onnx_yolo_detector::OnnxYoloDetector;
use moodwatch_core::emotion::domain::emotion_classifier::EmotionClassifier;
use moodwatch_core::emotion::infrastructure::face_emotion_classifier::FaceEmotionClassifier;
use moodwatch_core::emotion::infrastructure::onnx_ferplus_recognizer::OnnxFerPlusRecognizer;
use moodwatch_core::explanation::infrastructure::gemini_explainer::GeminiExplainer;
use moodwatch_core::pipeline::analyze_upload_use_case::{AnalysisOutcome, AnalyzeUploadUseCase};
use moodwatch_core::pipeline::upload_store::{Upload, UploadStore};
use moodwatch_core::reporting::domain::report_sink::ReportSink;
use moodwatch_core::reporting::infrastructure::log_notifier::LogNotifier;
use moodwatch_core::reporting::infrastructure::text_report_sink::TextReportSink;
use moodwatch_core::shared::constants::{
    FERPLUS_MODEL_NAME, FERPLUS_MODEL_URL, YOLO_MODEL_NAME, YOLO_MODEL_URL,
};
use moodwatch_core::shared::model_resolver;

use settings::Settings;

/// Exit code when the analysis itself failed (the error has been rendered).
const EXIT_ANALYSIS_FAILED: i32 = 2;

/// Facial emotion analysis with escalation of negative emotions.
#[derive(Parser)]
#[command(name = "moodwatch")]
struct Cli {
    /// Image to analyze (jpg, jpeg or png), or `-` to read it from stdin.
    image: PathBuf,

    /// File name reported for stdin uploads; its extension selects the format.
    #[arg(long, default_value = "upload.jpg")]
    name: String,

    /// Settings file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gemini API key (overrides the settings file).
    #[arg(long)]
    api_key: Option<String>,

    /// Gemini API base URL.
    #[arg(long)]
    api_base: Option<String>,

    /// Gemini model id.
    #[arg(long)]
    model_id: Option<String>,

    /// Face detection confidence threshold (0.0-1.0).
    #[arg(long)]
    confidence: Option<f64>,

    /// Emotions that trigger an escalation (comma-separated).
    #[arg(long, value_delimiter = ',')]
    negative_emotions: Option<Vec<String>>,

    /// The two escalation recipients (comma-separated).
    #[arg(long, value_delimiter = ',')]
    targets: Option<Vec<String>>,

    /// Directory checked for model files before downloading.
    #[arg(long)]
    models_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    let upload = read_upload(&cli.image, &cli.name)?;

    let classifier = build_classifier(&settings)?;
    let explainer = GeminiExplainer::with_reqwest(settings.gemini_config()?)?;
    let mut use_case = AnalyzeUploadUseCase::new(
        classifier,
        Box::new(explainer),
        Box::new(LogNotifier),
        settings.policy(),
        settings.targets(),
        UploadStore::new(),
    );

    let stdout = io::stdout();
    let mut sink = TextReportSink::new(stdout.lock());
    sink.title("Emotion analysis of an image");
    let analysis = use_case.execute(&upload, &mut sink);

    Ok(match analysis.outcome {
        AnalysisOutcome::Failed(_) => EXIT_ANALYSIS_FAILED,
        AnalysisOutcome::NoFace | AnalysisOutcome::Completed(_) => 0,
    })
}

fn resolve_settings(cli: &Cli) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    if let Some(key) = &cli.api_key {
        settings.api_key = Some(key.clone());
    }
    if let Some(base) = &cli.api_base {
        settings.api_base = base.clone();
    }
    if let Some(model) = &cli.model_id {
        settings.model_id = model.clone();
    }
    if let Some(confidence) = cli.confidence {
        settings.confidence = confidence;
    }
    if let Some(emotions) = &cli.negative_emotions {
        settings.negative_emotions = emotions.clone();
    }
    if let Some(targets) = &cli.targets {
        settings.set_escalation_targets(targets)?;
    }
    if let Some(dir) = &cli.models_dir {
        settings.models_dir = Some(dir.clone());
    }

    settings.validate()?;
    Ok(settings)
}

fn read_upload(image: &Path, stdin_name: &str) -> Result<Upload, Box<dyn std::error::Error>> {
    if image == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(Upload::new(stdin_name, bytes));
    }

    if !image.exists() {
        return Err(format!("Input file not found: {}", image.display()).into());
    }
    let file_name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| stdin_name.to_string());
    Ok(Upload::new(file_name, std::fs::read(image)?))
}

fn build_classifier(
    settings: &Settings,
) -> Result<Box<dyn EmotionClassifier>, Box<dyn std::error::Error>> {
    let bundled = settings.models_dir.as_deref();

    log::info!("Resolving model: {YOLO_MODEL_NAME}");
    let detector_path = model_resolver::resolve(
        YOLO_MODEL_NAME,
        YOLO_MODEL_URL,
        bundled,
        Some(Box::new(|d, t| download_progress("face detection", d, t))),
    )?;

    log::info!("Resolving model: {FERPLUS_MODEL_NAME}");
    let recognizer_path = model_resolver::resolve(
        FERPLUS_MODEL_NAME,
        FERPLUS_MODEL_URL,
        bundled,
        Some(Box::new(|d, t| download_progress("emotion", d, t))),
    )?;

    let detector = OnnxYoloDetector::new(&detector_path, settings.confidence)?;
    let recognizer = OnnxFerPlusRecognizer::new(&recognizer_path)?;
    Ok(Box::new(FaceEmotionClassifier::new(
        Box::new(detector),
        Box::new(recognizer),
    )))
}

fn download_progress(model: &str, downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading {model} model... {pct}%");
    } else {
        eprint!("\rDownloading {model} model... {downloaded} bytes");
    }
    if total > 0 && downloaded >= total {
        eprintln!();
    }
}
