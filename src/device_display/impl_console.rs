use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

pub struct DeviceDisplayConsole {
    lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn render(&self) -> String {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let border = "─".repeat(width);

        let mut out = format!("┌{}┐\n", border);
        for line in &self.lines {
            out.push_str(&format!("│{:<width$}│\n", line, width = width));
        }
        out.push_str(&format!("└{}┘", border));
        out
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}", self.render());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.clear();
        Ok(())
    }

    fn show(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines = text.lines().map(str::to_string).collect();
        println!("{}", self.render());
        Ok(())
    }
}
