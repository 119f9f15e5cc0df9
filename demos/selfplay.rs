use std::error::Error;

use checkers::{computer::Seeded, player::COMPUTER_NAME, BoardSize, Game, Settings, Side};
use clap::Parser;

#[derive(Debug, Parser)]
struct Opt {
    /// Board size (6, 8 or 10)
    #[arg(long, default_value = "8")]
    size: BoardSize,
    /// Seed of the move selector
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u32,
    /// Points each surviving king is worth
    #[arg(long)]
    king_points: Option<u32>,
    /// Declare a tie after this many turns without capture or promotion
    #[arg(long, default_value_t = 50)]
    quiet_turns: u32,
    /// Prints the result of each round only
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();

    let mut settings = Settings::default().with_quiet_turn_limit(Some(opt.quiet_turns));
    if let Some(king_points) = opt.king_points {
        settings = settings.with_king_points(king_points);
    }

    let size = u32::from(opt.size);
    let (name1, name2) = (format!("{COMPUTER_NAME}1"), format!("{COMPUTER_NAME}2"));
    let mut game = Game::new(size, &name1, &name2, true)?
        .with_settings(settings)
        .with_selector(Seeded::new(opt.seed));

    for round in 1..=opt.rounds {
        if round > 1 {
            game.reset(size)?;
        }
        if !opt.quiet {
            for player in [game.player1(), game.player2()] {
                println!("{} plays {}/{}", player.name(), player.regular(), player.king());
            }
            println!("{}", game.board());
        }

        let mut turn = 1;
        while game.status().is_in_progress() {
            let player = game.current_player().name().to_owned();
            let chain = game.make_computer_move()?;
            if !opt.quiet {
                match chain.captures().count() {
                    0 => println!("{turn}. {player}: {chain}"),
                    n => println!("{turn}. {player}: {chain} ({n} captured)"),
                }
                println!("{}", game.board());
            }
            turn += 1;
        }

        println!(
            "round {round}: {} after {} turns, points {}-{}, scores {}-{}",
            game.status(),
            turn - 1,
            game.compute_points(Side::One),
            game.compute_points(Side::Two),
            game.player1().score(),
            game.player2().score(),
        );
    }

    Ok(())
}
