//! Seeded self-play against an in-process registry: registers two players,
//! submits random fleets and fires blindly until one side wins.

use battleship_server::{AttackResult, GameServer, PairStatus, FIELD_SIZE};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Classic roster (one 4, two 3s, three 2s, four 1s) placed without overlap.
/// Touching ships merge into one connected group; the engine models whatever
/// the occupancy implies, so that is fine for a smoke game.
fn random_field(rng: &mut SmallRng) -> Vec<Vec<u8>> {
    let mut field = vec![vec![0u8; FIELD_SIZE]; FIELD_SIZE];
    for len in [4usize, 3, 3, 2, 2, 2, 1, 1, 1, 1] {
        loop {
            let horizontal: bool = rng.random();
            let (dx, dy) = if horizontal { (0, 1) } else { (1, 0) };
            let x = rng.random_range(0..FIELD_SIZE - dx * (len - 1));
            let y = rng.random_range(0..FIELD_SIZE - dy * (len - 1));
            let cells: Vec<_> = (0..len).map(|i| (x + dx * i, y + dy * i)).collect();
            if cells.iter().all(|&(cx, cy)| field[cx][cy] == 0) {
                for (cx, cy) in cells {
                    field[cx][cy] = 1;
                }
                break;
            }
        }
    }
    field
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let server = GameServer::new();
    let p0 = server.register();
    let p1 = server.register();
    match server.status(p0)? {
        PairStatus::Paired(opponent) => assert_eq!(opponent, p1),
        PairStatus::Pending => anyhow::bail!("pairing failed"),
    }

    let summary0 = server.submit_field(p0, &random_field(&mut rng))?;
    let summary1 = server.submit_field(p1, &random_field(&mut rng))?;
    println!(
        "player {}: {} ships / player {}: {} ships",
        p0, summary0.ships, p1, summary1.ships
    );

    let mut shots = 0u32;
    let winner = loop {
        let shooter = if rng.random() { p0 } else { p1 };
        let x = rng.random_range(0..FIELD_SIZE);
        let y = rng.random_range(0..FIELD_SIZE);
        shots += 1;
        match server.attack(shooter, x, y)? {
            AttackResult::YouWin => break shooter,
            AttackResult::YouLose => break if shooter == p0 { p1 } else { p0 },
            AttackResult::Shot(_) => {}
        }
    };
    println!("player {} wins after {} shots (seed {})", winner, shots, seed);
    Ok(())
}
