use std::env;
use std::io::{self, BufRead};
use std::sync::mpsc::channel;
use std::thread;
use std::time::Duration;

use chessboard_engine::shell::text_shell::{run_event_loop, ShellEvent};

const TICK_PERIOD: Duration = Duration::from_secs(1);

fn main() -> io::Result<()> {
    let manual_clock = env::args().any(|arg| arg == "--manual-clock");
    let (event_tx, event_rx) = channel::<ShellEvent>();

    // Stdin reader
    let line_tx = event_tx.clone();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(ShellEvent::Line(line)).is_err() {
                break;
            }
        }
    });

    // Host clock: one tick per second
    if !manual_clock {
        let tick_tx = event_tx.clone();
        thread::spawn(move || loop {
            thread::sleep(TICK_PERIOD);
            if tick_tx.send(ShellEvent::Tick).is_err() {
                break;
            }
        });
    }
    drop(event_tx);

    let mut stdout = io::stdout();
    run_event_loop(event_rx, &mut stdout)
}
