use csvddl::source::TabularSource;
use csvddl::sql::Dialect;
use csvddl::synthesize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <data-dir> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -o, --output <dir>    Write schema.sql and load.sql into <dir> (default: stdout)");
        eprintln!("  -d, --dialect <name>  Dialect: generic, postgres (default: generic)");
        process::exit(1);
    }

    let data_dir = PathBuf::from(&args[1]);
    let mut output_dir: Option<PathBuf> = None;
    let mut dialect = Dialect::Generic;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_dir = Some(PathBuf::from(&args[i]));
                }
            }
            "-d" | "--dialect" => {
                i += 1;
                if i < args.len() {
                    dialect = Dialect::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid dialect: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut csv_paths: Vec<PathBuf> = match fs::read_dir(&data_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
            .collect(),
        Err(e) => {
            eprintln!("Failed to read {}: {}", data_dir.display(), e);
            process::exit(1);
        }
    };
    // stable discovery order regardless of directory enumeration order
    csv_paths.sort();

    if csv_paths.is_empty() {
        eprintln!("No .csv files in {}", data_dir.display());
        process::exit(1);
    }

    let mut sources = Vec::with_capacity(csv_paths.len());
    for path in &csv_paths {
        match TabularSource::from_path(path) {
            Ok(source) => sources.push(source),
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    let scripts = match synthesize(&sources, dialect) {
        Ok(scripts) => scripts,
        Err(e) => {
            eprintln!("Synthesis failed: {}", e);
            process::exit(1);
        }
    };

    let schema_sql = scripts.ddl.join("\n");
    let load_sql = scripts.inserts.join("\n");

    match output_dir {
        Some(dir) => {
            for (file, text) in [("schema.sql", &schema_sql), ("load.sql", &load_sql)] {
                let path = dir.join(file);
                if let Err(e) = fs::write(&path, text) {
                    eprintln!("Failed to write {}: {}", path.display(), e);
                    process::exit(1);
                }
            }
        }
        None => {
            print!("{}", schema_sql);
            if !load_sql.is_empty() {
                println!();
                print!("{}", load_sql);
            }
        }
    }
}
