use std::fmt::Write;
use crate::output::structs::console_output::ConsoleOutput;
use crate::output::structs::rendered_result::RenderedResult;
use crate::output::traits::output_boundary::OutputBoundary;
use crate::query::enums::destination::Destination;
use crate::query::enums::query_error::QueryError;
use crate::query::enums::query_result::QueryResult;
use crate::query::structs::request::Request;

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOutput {
    pub fn new() -> ConsoleOutput {
        ConsoleOutput {
            broadcast_prefix: String::from("[Broadcast] "),
        }
    }

    /// `mine_block` + `stone` reads as "Mine Block (Stone)".
    pub fn label(request: &Request) -> String {
        let mut label = Self::pretty(&request.statistic().name);
        if let Some(qualifier) = request.qualifier() {
            let _ = write!(label, " ({})", Self::pretty(&qualifier.name));
        }
        label
    }

    pub fn format_number(value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            grouped.push('-');
        }
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        grouped
    }

    fn pretty(name: &str) -> String {
        name.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl OutputBoundary for ConsoleOutput {
    fn render(&self, result: &QueryResult, request: &Request) -> RenderedResult {
        let label = Self::label(request);
        match result {
            QueryResult::Player { name, value } => {
                RenderedResult::new(format!("{name}: {} {label}", Self::format_number(*value as i64)))
            }
            QueryResult::Server(total) => {
                RenderedResult::new(format!("{label} on this server: {}", Self::format_number(*total)))
            }
            QueryResult::Top(ranked) => {
                let mut body = format!("Top {} {label}", ranked.limit);
                if ranked.is_empty() {
                    body.push_str("\nNobody has this statistic yet");
                }
                for (rank, sample) in ranked.iter().enumerate() {
                    let _ = write!(body, "\n{:>2}. {} {}", rank + 1, sample.player, Self::format_number(sample.value as i64));
                }
                RenderedResult::new(body)
            }
        }
    }

    fn render_failure(&self, error: &QueryError, request: &Request) -> RenderedResult {
        RenderedResult::new(format!("{} failed: {error}", Self::label(request)))
    }

    fn deliver(&self, payload: &RenderedResult, destination: &Destination) {
        match destination {
            Destination::Requester(_) => println!("{payload}"),
            Destination::Broadcast => {
                for line in payload.lines() {
                    println!("{}{line}", self.broadcast_prefix);
                }
            }
        }
    }
}
