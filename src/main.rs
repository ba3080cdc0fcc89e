use clap::Parser;
use env_logger::Env;
use log::*;
use maxheap_rs::heap::{MaxHeap, DEFAULT_CAPACITY};
use maxheap_rs::menu::Menu;
use std::error::Error;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive max-heap of integers")]
struct Cli {
    /// Initial storage capacity; doubles as needed.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Build the heap from this file before showing the menu.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    debug!("Args {:?}", cli);

    let mut heap = MaxHeap::new(cli.capacity);
    if let Some(path) = &cli.file {
        match heap.build_heap_from_file(path) {
            Ok(n) => info!("-> preloaded {} values from {}", n, path.display()),
            Err(e) => error!("{}", e),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(heap, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
