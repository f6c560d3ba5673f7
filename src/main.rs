use textmill::{App, Result};

fn main() -> Result<()> {
    println!("textmill - interactive text file processing");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::new();
    app.run()
}
