use liquid::{ElementEntry, LayoutConfig, LayoutEngine, LiquidError, SvgPainter};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::process;

struct Options {
    width: f32,
    height: f32,
    layout_path: String,
    svg_path: Option<String>,
    strict: bool,
}

fn usage(program: &str) -> ! {
    eprintln!("Resolves a JSON layout descriptor into absolute rectangles.");
    eprintln!();
    eprintln!(
        "Usage: {} <width> <height> <path/to/layout.json> [--svg <path/to/out.svg>] [--strict]",
        program
    );
    process::exit(1);
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut positional = Vec::new();
    let mut svg_path = None;
    let mut strict = false;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--svg" => svg_path = Some(rest.next()?.clone()),
            "--strict" => strict = true,
            _ => positional.push(arg),
        }
    }

    let [width, height, layout_path] = positional.as_slice() else {
        return None;
    };
    Some(Options {
        width: width.parse().ok()?,
        height: height.parse().ok()?,
        layout_path: layout_path.to_string(),
        svg_path,
        strict,
    })
}

fn main() -> Result<(), LiquidError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("liquid");
    let Some(options) = parse_args(&args) else {
        usage(program);
    };

    log::info!("Loading layout from {}", options.layout_path);
    let source = fs::read_to_string(&options.layout_path)?;
    let entry: ElementEntry = serde_json::from_str(&source)?;

    let engine = LayoutEngine::new(LayoutConfig {
        strict: options.strict,
        ..Default::default()
    });
    let mut tree = engine.build_tree(&entry)?;
    tree.layout(0.0, 0.0, options.width, options.height);

    if let Some(svg_path) = &options.svg_path {
        let mut painter = SvgPainter::new(options.width, options.height);
        tree.paint(&mut painter);
        fs::write(svg_path, painter.finish())?;
        log::info!("Wrote outline to {}", svg_path);
    }

    let result = tree.enumerate_layout();
    let sorted: BTreeMap<_, _> = result.iter().collect();
    println!("{}", serde_json::to_string_pretty(&sorted)?);
    Ok(())
}
