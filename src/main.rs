use anyhow::Result;

fn main() -> Result<()> {
    arpeggio::quiz::run()
}
