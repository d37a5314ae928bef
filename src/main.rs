//! Command-line interface for exporting and reviewing checklists.

use clap::{Parser, Subcommand};
use rackcheck::{
    ChecklistStats, CompletedStore, ExportError, ExportFormat, TicketId, TicketRecord,
    build_report_lines, export_file_name, export_ticket, render_text,
};
use std::fs;
use std::path::PathBuf;

const DEFAULT_STORE: &str = "completed_checklists.json";

#[derive(Parser)]
#[command(name = "rackcheck", version, about = "Field-survey checklist reports")]
struct Cli {
    /// Path of the completed-tickets archive.
    #[arg(long, global = true, default_value = DEFAULT_STORE)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a ticket as .txt, .pdf or .docx files.
    Export {
        /// Ticket code to export.
        ticket: String,

        /// Read the record from a JSON file instead of the archive.
        #[arg(long, value_name = "FILE")]
        record: Option<PathBuf>,

        /// Format to produce; omit to produce all three.
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Directory the files are written into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Append today's date to the file names.
        #[arg(long)]
        date_stamp: bool,
    },

    /// Archive a filled record under a ticket code.
    Complete {
        /// Ticket code to archive under.
        ticket: String,

        /// JSON file with the filled record.
        record: PathBuf,
    },

    /// List the ticket codes in the archive.
    List,

    /// Print the text report of an archived ticket.
    Show {
        /// Ticket code to review.
        ticket: String,
    },

    /// Print aggregate statistics over the archive.
    Stats {
        /// Emit the statistics as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ExportError> {
    let store = CompletedStore::new(&cli.store);
    match cli.command {
        Command::Export { ticket, record, format, out_dir, date_stamp } => {
            let id = TicketId::new(&ticket);
            let record = match record {
                Some(path) => read_record(&path)?,
                None => store.get(&id).ok_or_else(|| ExportError::TicketNotFound(id.clone()))?,
            };
            let date = date_stamp.then(|| chrono::Local::now().date_naive());
            let formats = match format {
                Some(format) => vec![format],
                None => ExportFormat::ALL.to_vec(),
            };
            fs::create_dir_all(&out_dir)?;
            for format in formats {
                let bytes = export_ticket(&record, format)?;
                let path = out_dir.join(export_file_name(&id, format, date));
                fs::write(&path, bytes)?;
                println!("{}", path.display());
            }
            Ok(())
        }
        Command::Complete { ticket, record } => {
            let id = TicketId::new(&ticket);
            let record = read_record(&record)?;
            store.insert(id.clone(), record)?;
            println!("archived {id}");
            Ok(())
        }
        Command::List => {
            for id in store.load().keys() {
                println!("{id}");
            }
            Ok(())
        }
        Command::Show { ticket } => {
            let id = TicketId::new(&ticket);
            let record =
                store.get(&id).ok_or_else(|| ExportError::TicketNotFound(id.clone()))?;
            println!("{}", render_text(&build_report_lines(&record)));
            Ok(())
        }
        Command::Stats { json } => {
            let stats = ChecklistStats::from_tickets(&store.load());
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
            Ok(())
        }
    }
}

fn read_record(path: &PathBuf) -> Result<TicketRecord, ExportError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_stats(stats: &ChecklistStats) {
    println!("Chamados concluídos: {}", stats.total_tickets);
    println!("Total de racks: {}", stats.total_racks);
    println!("Média de racks por chamado: {:.1}", stats.mean_racks_per_ticket());

    if !stats.tickets_by_location.is_empty() {
        println!("\nChamados por localização:");
        for (location, count) in &stats.tickets_by_location {
            println!("  {location}: {count}");
        }
    }

    let status = &stats.rack_status;
    println!("\nStatus dos racks (Sim/Não):");
    println!("  Bom estado: {}/{}", status.bom_estado.sim, status.bom_estado.nao);
    println!("  Organizado: {}/{}", status.organizado.sim, status.organizado.nao);
    println!("  Identificado: {}/{}", status.identificado.sim, status.identificado.nao);
}
