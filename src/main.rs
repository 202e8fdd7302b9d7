use std::io;

use clap::Parser;
use hex_walk::config::{Cli, Command};
use hex_walk::game::Board;
use hex_walk::session;
use hex_walk::terminal::TerminalFrontend;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hex_walk=info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> hex_walk::Result<()> {
    let config = cli.session_config();
    let mut board = Board::new();
    let mut frontend = TerminalFrontend::new(io::stdout().lock());

    match cli.command {
        Command::Play => session::play(&mut board, io::stdin().lock(), &mut frontend, &config),
        Command::Sierpinski { depth, animate } => {
            if animate {
                session::sierpinski_walk(&mut board, depth, &mut frontend, &config)
            } else {
                session::sierpinski(&mut board, depth, &mut frontend)
            }
        }
        Command::Random { steps, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            session::random_walk(&mut board, steps, &mut rng, &mut frontend, &config)
        }
    }
}
