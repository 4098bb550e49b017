use crate::error::Result;
use iredgen::core::rules;
use std::io::{self, Write};
use tracing::info;

pub fn run() -> Result<()> {
    info!("Listing {} registered bond vector tags.", rules::rules().len());
    let stdout = io::stdout();
    write_tags(&mut stdout.lock())?;
    Ok(())
}

pub fn write_tags(writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "The available bond vector types are:")?;
    for rule in rules::rules() {
        writeln!(writer, "  {:<5} {}", rule.tag(), rule.description())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_tag_in_registration_order() {
        let mut buffer = Vec::new();
        write_tags(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let tags: Vec<&str> = text
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(tags, rules::list_tags());
        assert!(text.contains("  me    side-chain methyl groups\n"));
    }
}
