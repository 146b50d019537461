// main.rs - Terminal front end for the life engine

use std::thread;

use life::{Engine, LifeResult, MIN_INTERVAL};

const ROWS: usize = 20;
const COLS: usize = 40;
const GENERATIONS: u64 = 60;

fn main() -> LifeResult<()> {
    env_logger::init();

    let mut engine = Engine::new(ROWS, COLS)?;

    // a glider, headed for the bottom-right corner
    for (row, col) in [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)] {
        engine.toggle_cell(row, col)?;
    }

    engine.play(MIN_INTERVAL);
    while engine.iterations() < GENERATIONS {
        render(&engine);
        thread::sleep(engine.interval());
    }
    engine.pause();
    render(&engine);

    println!(
        "{} generations: {} cells created, {} cells destroyed",
        engine.iterations(),
        engine.cells_created(),
        engine.cells_destroyed()
    );
    Ok(())
}

fn render(engine: &Engine) {
    let (rows, cols) = engine.dimensions();
    let mut frame = String::with_capacity(rows * (cols + 1));
    engine.for_each_cell(|_, col, alive| {
        frame.push(if alive { '#' } else { '.' });
        if col + 1 == cols {
            frame.push('\n');
        }
    });
    // clear the screen and repaint
    print!("\x1B[2J\x1B[H{}", frame);
    println!(
        "generation {:>4}   live cells {:>4}",
        engine.iterations(),
        engine.live_cells()
    );
}
