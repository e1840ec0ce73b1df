use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use hms_core::{
    config::data_dir_from_env_value, AdmissionType, AdmissionTypeManager, AdmissionTypeService,
    CatalogueKind, CatalogueStore, CoreConfig, DeliveryResultType, DeliveryResultTypeManager,
    DeliveryResultTypeService, ExamManager, ExamService, ExamType, ExamTypeManager,
    ExamTypeService, HmsError, HmsResult,
};

#[derive(Parser)]
#[command(name = "hms")]
#[command(about = "HMS hospital reference data CLI")]
struct Cli {
    /// Catalogue directory (defaults to HMS_DATA_DIR, then "hospital_data")
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the records of a catalogue
    List { catalogue: Catalogue },
    /// Add a record to a code/description catalogue
    Add {
        catalogue: CodeCatalogue,
        code: String,
        description: String,
    },
    /// Remove a record by code
    Remove { catalogue: Catalogue, code: String },
    /// List the allowed results of an exam
    Rows { exam_code: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Catalogue {
    AdmissionTypes,
    DeliveryResultTypes,
    ExamTypes,
    Exams,
}

/// Catalogues whose records are just a code and a description.
#[derive(Clone, Copy, ValueEnum)]
enum CodeCatalogue {
    AdmissionTypes,
    DeliveryResultTypes,
    ExamTypes,
}

struct Managers {
    admission_types: AdmissionTypeService,
    delivery_result_types: DeliveryResultTypeService,
    exam_types: ExamTypeService,
    exams: ExamService,
}

impl Managers {
    fn open(cfg: &CoreConfig) -> Self {
        let store = Arc::new(CatalogueStore::new(cfg));
        Self {
            admission_types: AdmissionTypeService::new(store.clone()),
            delivery_result_types: DeliveryResultTypeService::new(store.clone()),
            exam_types: ExamTypeService::new(store.clone()),
            exams: ExamService::new(store),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_dir =
        data_dir_from_env_value(cli.data_dir.or_else(|| std::env::var("HMS_DATA_DIR").ok()));
    let cfg = CoreConfig::new(data_dir)?;
    let managers = Managers::open(&cfg);

    let result = match cli.command {
        Commands::List { catalogue } => list(&managers, catalogue),
        Commands::Add {
            catalogue,
            code,
            description,
        } => add(&managers, catalogue, code, description),
        Commands::Remove { catalogue, code } => remove(&managers, catalogue, &code),
        Commands::Rows { exam_code } => rows(&managers, &exam_code),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn print_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) {
    let mut empty = true;
    for (code, description) in entries {
        empty = false;
        println!("{}\t{}", code, description);
    }
    if empty {
        println!("No records found.");
    }
}

fn list(managers: &Managers, catalogue: Catalogue) -> HmsResult<()> {
    match catalogue {
        Catalogue::AdmissionTypes => {
            let records = managers.admission_types.admission_types()?;
            print_entries(records.iter().map(|r| (r.code.as_str(), r.description.as_str())));
        }
        Catalogue::DeliveryResultTypes => {
            let records = managers.delivery_result_types.delivery_result_types()?;
            print_entries(records.iter().map(|r| (r.code.as_str(), r.description.as_str())));
        }
        Catalogue::ExamTypes => {
            let records = managers.exam_types.exam_types()?;
            print_entries(records.iter().map(|r| (r.code.as_str(), r.description.as_str())));
        }
        Catalogue::Exams => {
            let exams = managers.exams.exams()?;
            if exams.is_empty() {
                println!("No records found.");
            }
            for exam in exams {
                println!(
                    "{}\t{}\ttype: {}\tprocedure: {}",
                    exam.code,
                    exam.description,
                    exam.exam_type.code,
                    exam.procedure.as_code()
                );
            }
        }
    }
    Ok(())
}

fn add(
    managers: &Managers,
    catalogue: CodeCatalogue,
    code: String,
    description: String,
) -> HmsResult<()> {
    let code = match catalogue {
        CodeCatalogue::AdmissionTypes => {
            managers
                .admission_types
                .new_admission_type(AdmissionType::new(code, description))?
                .code
        }
        CodeCatalogue::DeliveryResultTypes => {
            managers
                .delivery_result_types
                .new_delivery_result_type(DeliveryResultType::new(code, description))?
                .code
        }
        CodeCatalogue::ExamTypes => {
            managers
                .exam_types
                .new_exam_type(ExamType::new(code, description))?
                .code
        }
    };
    println!("Added {}", code);
    Ok(())
}

fn remove(managers: &Managers, catalogue: Catalogue, code: &str) -> HmsResult<()> {
    let not_found = |kind: CatalogueKind| HmsError::NotFound {
        kind,
        code: code.to_string(),
    };

    match catalogue {
        Catalogue::AdmissionTypes => {
            let record = managers
                .admission_types
                .admission_types()?
                .into_iter()
                .find(|r| r.code == code)
                .ok_or_else(|| not_found(CatalogueKind::AdmissionType))?;
            managers.admission_types.delete_admission_type(&record)?;
        }
        Catalogue::DeliveryResultTypes => {
            let record = managers
                .delivery_result_types
                .delivery_result_types()?
                .into_iter()
                .find(|r| r.code == code)
                .ok_or_else(|| not_found(CatalogueKind::DeliveryResultType))?;
            managers
                .delivery_result_types
                .delete_delivery_result_type(&record)?;
        }
        Catalogue::ExamTypes => {
            let record = managers
                .exam_types
                .exam_types()?
                .into_iter()
                .find(|r| r.code == code)
                .ok_or_else(|| not_found(CatalogueKind::ExamType))?;
            managers.exam_types.delete_exam_type(&record)?;
        }
        Catalogue::Exams => {
            let exam = managers
                .exams
                .exams()?
                .into_iter()
                .find(|e| e.code == code)
                .ok_or_else(|| not_found(CatalogueKind::Exam))?;
            managers.exams.delete_exam(&exam)?;
        }
    }
    println!("Removed {}", code);
    Ok(())
}

fn rows(managers: &Managers, exam_code: &str) -> HmsResult<()> {
    let rows = managers.exams.exam_rows(exam_code)?;
    if rows.is_empty() {
        println!("Exam {} has no rows.", exam_code);
    }
    for row in rows {
        println!("{}\t{}", row.code, row.description);
    }
    Ok(())
}
