use folio_i18n::config;
use folio_i18n::i18n::I18n;
use pico_args;

/// Prints a terminal preview of the localized site content.
///
/// Handy for proofreading a locale without spinning up the web UI:
/// `folio_i18n --lang fr`
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();

    let config = config::load().unwrap_or_default();
    let i18n = I18n::new(lang, &config);

    let locales: Vec<String> = i18n
        .available_locales()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "Locale: {} (available: {})",
        i18n.current_locale(),
        locales.join(", ")
    );
    println!();

    println!("{} {}", i18n.tr("hero.greeting"), i18n.tr("hero.name"));
    for phrase in i18n.tr_list("hero.typewriterPhrases") {
        println!("  - {}", phrase);
    }
    println!();

    for section in ["about", "experience", "portfolio", "services", "contact"] {
        println!("[{}] {}", section, i18n.tr(&format!("{}.title", section)));
    }
}
