use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use sarf::lexicon::{find_by_root, load_lexicon};
use sarf::{
    render_conjugation, Conjugation, ConjugationCache, DiacriticsPreference, Mood, PassiveVoice,
    Tense, Verb, Voice,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TenseArg {
    Past,
    Present,
    Future,
    Imperative,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MoodArg {
    Indicative,
    Subjunctive,
    Jussive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VoiceArg {
    Active,
    Passive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DiacriticsArg {
    All,
    Some,
    None,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PassiveArg {
    Full,
    Impersonal,
    None,
}

/// Conjugate Arabic verbs from a root or from a lexicon file.
#[derive(Parser, Debug)]
#[command(name = "sarf", version, about)]
struct Args {
    /// Root letters, e.g. كتب. With --lexicon, selects that root's entries.
    #[arg(long, required_unless_present = "lexicon")]
    root: Option<String>,

    /// Verb form, 1 to 10
    #[arg(long, default_value_t = 1)]
    form: u8,

    /// Form I vowel pattern, e.g. fa3ala-yaf3ulu
    #[arg(long)]
    pattern: Option<String>,

    /// Passive capability of the verb given with --root
    #[arg(long, value_enum, default_value_t = PassiveArg::Full)]
    passive: PassiveArg,

    #[arg(long, value_enum, default_value_t = TenseArg::Past)]
    tense: TenseArg,

    /// Mood of the present tense
    #[arg(long, value_enum, default_value_t = MoodArg::Indicative)]
    mood: MoodArg,

    #[arg(long, value_enum, default_value_t = VoiceArg::Active)]
    voice: VoiceArg,

    #[arg(long, value_enum, default_value_t = DiacriticsArg::All)]
    diacritics: DiacriticsArg,

    /// Conjugate the entries of this JSON lexicon
    #[arg(long, env = "SARF_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Memo store for computed paradigms
    #[arg(long, env = "SARF_CACHE")]
    cache: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn tense(&self) -> Tense {
        match self.tense {
            TenseArg::Past => Tense::Past,
            TenseArg::Present => Tense::Present(match self.mood {
                MoodArg::Indicative => Mood::Indicative,
                MoodArg::Subjunctive => Mood::Subjunctive,
                MoodArg::Jussive => Mood::Jussive,
            }),
            TenseArg::Future => Tense::Future,
            TenseArg::Imperative => Tense::Imperative,
        }
    }

    fn voice(&self) -> Voice {
        match self.voice {
            VoiceArg::Active => Voice::Active,
            VoiceArg::Passive => Voice::Passive,
        }
    }

    fn diacritics(&self) -> DiacriticsPreference {
        match self.diacritics {
            DiacriticsArg::All => DiacriticsPreference::All,
            DiacriticsArg::Some => DiacriticsPreference::Partial,
            DiacriticsArg::None => DiacriticsPreference::Bare,
        }
    }

    fn passive_voice(&self) -> PassiveVoice {
        match self.passive {
            PassiveArg::Full => PassiveVoice::Full,
            PassiveArg::Impersonal => PassiveVoice::Impersonal,
            PassiveArg::None => PassiveVoice::None,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let verbs = match (&args.lexicon, &args.root) {
        (Some(path), None) => load_lexicon(path).map_err(|e| e.to_string())?,
        (Some(path), Some(root)) => {
            let lexicon = load_lexicon(path).map_err(|e| e.to_string())?;
            let matching: Vec<Verb> = find_by_root(&lexicon, root).into_iter().cloned().collect();
            if matching.is_empty() {
                return Err(format!("no lexicon entry for root {root}"));
            }
            matching
        }
        (None, Some(root)) => vec![Verb::new(
            root,
            args.form,
            args.pattern.as_deref(),
            args.passive_voice(),
        )
        .map_err(|e| e.to_string())?],
        (None, None) => return Err("either --root or --lexicon is required".into()),
    };

    let mut cache = match &args.cache {
        Some(path) => ConjugationCache::from_file_or_new(path),
        None => ConjugationCache::new(),
    };
    let (tense, voice, preference) = (args.tense(), args.voice(), args.diacritics());

    let mut results = Vec::with_capacity(verbs.len());
    for verb in &verbs {
        match cache.get_or_conjugate(verb, tense, voice) {
            Ok(conjugation) => results.push((verb, render_conjugation(conjugation, preference))),
            // A lexicon run keeps going past verbs that lack the requested voice.
            Err(e) if args.lexicon.is_some() => warn!(root = %verb.root(), "skipped: {e}"),
            Err(e) => return Err(e.to_string()),
        }
    }

    if let Err(e) = cache.save() {
        warn!("could not save memo store: {e}");
    }

    if args.json {
        print_json(&results)
    } else {
        results.iter().for_each(|(verb, conjugation)| print_table(verb, conjugation));
        Ok(())
    }
}

fn print_table(verb: &Verb, conjugation: &Conjugation) {
    println!(
        "{} {}",
        verb.root().to_string().bold(),
        format!("(form {})", verb.form().number()).dark_grey()
    );
    for (pronoun, form) in conjugation.iter().filter(|(_, form)| !form.is_empty()) {
        println!("  {:>4}  {}", pronoun.code().cyan(), form);
    }
}

fn print_json(results: &[(&Verb, Conjugation)]) -> Result<(), String> {
    let rows: Vec<serde_json::Value> = results
        .iter()
        .map(|(verb, conjugation)| {
            let forms: serde_json::Map<String, serde_json::Value> = conjugation
                .iter()
                .map(|(pronoun, form)| (pronoun.code().to_string(), form.into()))
                .collect();
            serde_json::json!({ "verb": verb, "forms": forms })
        })
        .collect();
    let text = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
