use nutrilabel::{FieldTrace, ParseReport, default_table};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_report(report: &ParseReport, color: bool) {
    let palette = ansi::Palette::new(color);
    let title = format!("⚙  Label: \"{}\"", preview(&report.normalized));
    println!("\n{}", palette.bold(palette.paint(title, ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Gating ━━━", ansi::GRAY));
    let metrics = &report.metrics;
    println!(
        "  fields {} considered, {} skipped  │  matchers {} run, {} skipped {}",
        palette.paint(metrics.fields_considered.to_string(), ansi::GREEN),
        palette.dim(metrics.fields_gated.to_string()),
        palette.paint(metrics.matchers_run.to_string(), ansi::GREEN),
        palette.dim(metrics.matchers_gated.to_string()),
        palette.dim(format!("(table: {} matchers)", default_table().matcher_count())),
    );

    println!("\n{}", palette.paint("━━━ Fields ━━━", ansi::GRAY));
    if report.result.is_empty() {
        println!("{}", palette.dim("  No values extracted"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No nutrient label keywords in the text");
        println!("  • Amounts without a recognised unit (g, mg, mcg, IU)");
        println!("\n{}", palette.dim("  Tip: set NUTRILABEL_LOG=nutrilabel=trace to see every matcher attempt"));
    } else {
        for trace in &metrics.traces {
            println!("  {}", fmt_trace(trace, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Extract: {}",
        palette.paint(format!("{:?}", report.elapsed), ansi::GREEN),
        palette.dim(format!("{:?}", metrics.total)),
    );
    println!();
}

fn fmt_trace(trace: &FieldTrace, palette: &ansi::Palette) -> String {
    let name = palette.paint(format!("{:<22}", trace.nutrient.as_str()), ansi::BLUE);
    match (&trace.value, trace.matcher) {
        (Some(value), Some(matcher)) => format!(
            "{} {} {} {}",
            name,
            palette.bold(palette.paint(format!("{value}{}", trace.nutrient.unit().suffix()), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("{matcher} ({} tried)", trace.attempts), ansi::CYAN),
        ),
        _ => format!("{} {}", name, palette.dim(format!("✗ no match ({} tried)", trace.attempts))),
    }
}

fn preview(text: &str) -> String {
    const MAX: usize = 72;
    if text.chars().count() <= MAX {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX).collect();
    format!("{cut}…")
}
