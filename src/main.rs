use std::io;

use swap_chess::console::console_top::run_stdio_loop;

fn main() -> io::Result<()> {
    run_stdio_loop()
}
