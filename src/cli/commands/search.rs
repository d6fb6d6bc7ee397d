//! Search command implementation.
//!
//! `skycast search` geocodes a city name, lists the matches and optionally
//! stores one of them as the default city.

use crate::cli::args::SearchArgs;
use crate::cli::context::AppContext;
use crate::config::settings::SEARCH_RESULTS_RANGE;
use crate::config::set_default_city;
use crate::error::{Result, SkycastError};
use crate::location::Location;
use crate::ui::{hints, Prompt, PromptOption, Table, UserInterface};
use crate::weather::{WeatherClient, WeatherSource};

use super::dispatcher::{Command, CommandResult};

/// Shortest query sent to the geocoder.
pub const MIN_QUERY_CHARS: usize = 2;

/// The search command implementation.
pub struct SearchCommand<'a> {
    context: &'a AppContext,
    args: SearchArgs,
}

impl<'a> SearchCommand<'a> {
    /// Create a new search command.
    pub fn new(context: &'a AppContext, args: SearchArgs) -> Self {
        Self { context, args }
    }

    fn query(&self) -> Result<&str> {
        let query = self.args.query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(SkycastError::InvalidInput {
                message: format!(
                    "search query must be at least {} characters",
                    MIN_QUERY_CHARS
                ),
            });
        }
        Ok(query)
    }

    fn limit(&self) -> Result<usize> {
        let limit = self.args.limit.unwrap_or(self.context.settings.search_results);
        if !SEARCH_RESULTS_RANGE.contains(&limit) {
            return Err(SkycastError::InvalidInput {
                message: format!(
                    "--limit must be between {} and {}",
                    SEARCH_RESULTS_RANGE.start(),
                    SEARCH_RESULTS_RANGE.end()
                ),
            });
        }
        Ok(limit)
    }

    /// Run against an explicit weather source.
    pub fn run<S: WeatherSource>(
        &self,
        source: &S,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let query = self.query()?;

        let mut spinner = ui.start_spinner(&format!("Searching for {}", query));
        let matches = match source.search(query) {
            Ok(matches) => {
                spinner.finish_and_clear();
                matches
            }
            Err(err) => {
                spinner.finish_error("Search failed");
                ui.error(&err.to_string());
                ui.show_hint(hints::after_fetch_failure(&err));
                return Ok(CommandResult::failure(1));
            }
        };

        if matches.is_empty() {
            ui.warning(&format!("No places match \"{}\"", query));
            ui.show_hint(hints::no_search_results());
            return Ok(if self.args.set_default {
                CommandResult::failure(1)
            } else {
                CommandResult::success()
            });
        }

        ui.message(&results_table(&matches).render());

        if !self.args.set_default {
            ui.show_hint(&hints::after_search(query));
            return Ok(CommandResult::success());
        }

        let chosen = choose(&matches, ui)?;
        set_default_city(self.context.config_path(), chosen.clone())?;
        ui.success(&format!(
            "Default city set to {} ({})",
            chosen.display_name(),
            chosen.format_coordinates()
        ));
        Ok(CommandResult::success())
    }
}

impl Command for SearchCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = WeatherClient::new(&self.context.settings)?.with_search_limit(self.limit()?);
        self.run(&client, ui)
    }
}

fn results_table(matches: &[Location]) -> Table {
    let mut table = Table::new(vec!["#", "Name", "Region", "Country", "Coordinates"]).align_right(0);
    for (i, location) in matches.iter().enumerate() {
        table.add_row(&[
            (i + 1).to_string(),
            location.name.clone(),
            location.admin.clone().unwrap_or_default(),
            location.country.clone().unwrap_or_default(),
            location.format_coordinates(),
        ]);
    }
    table
}

/// Pick one match. A single match is taken as is.
fn choose<'m>(matches: &'m [Location], ui: &mut dyn UserInterface) -> Result<&'m Location> {
    if let [only] = matches {
        return Ok(only);
    }

    let options = matches
        .iter()
        .enumerate()
        .map(|(i, location)| PromptOption {
            label: format!(
                "{} ({})",
                location.display_name(),
                location.format_coordinates()
            ),
            value: i.to_string(),
        })
        .collect();
    let prompt = Prompt::select("city", "Which one should be the default?", options);

    let answer = ui.prompt(&prompt)?.as_string();
    answer
        .parse::<usize>()
        .ok()
        .and_then(|i| matches.get(i))
        .ok_or_else(|| SkycastError::InvalidInput {
            message: format!("no search result with index '{}'", answer),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_settings, Settings};
    use crate::ui::MockUI;
    use crate::weather::response::fixtures::zagreb_search_json;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn context(temp: &TempDir, server: &MockServer) -> AppContext {
        let mut settings = Settings::default();
        settings.api.geocoding_url = server.url("/v1/search");
        AppContext::new(
            settings,
            temp.path().join("config.json"),
            temp.path().join("cache.json"),
        )
    }

    fn args(query: &str, set_default: bool) -> SearchArgs {
        SearchArgs {
            query: query.to_string(),
            limit: None,
            set_default,
        }
    }

    #[test]
    fn lists_matches() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/search")
                .query_param("name", "Zagreb")
                .query_param("count", "10");
            then.status(200).body(zagreb_search_json());
        });
        let ctx = context(&temp, &server);
        let mut ui = MockUI::new();

        let result = SearchCommand::new(&ctx, args("Zagreb", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        mock.assert();
        assert!(ui.has_message("City of Zagreb"));
        assert!(ui.has_message("Serbia"));
        assert!(ui.has_hint("--set-default"));
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn limit_is_sent_as_count() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/search")
                .query_param("count", "3");
            then.status(200).body(zagreb_search_json());
        });
        let ctx = context(&temp, &server);
        let search = SearchArgs {
            limit: Some(3),
            ..args("Zagreb", false)
        };

        SearchCommand::new(&ctx, search)
            .execute(&mut MockUI::new())
            .unwrap();
        mock.assert();
    }

    #[test]
    fn short_query_is_rejected_without_request() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.path("/v1/search");
            then.status(200).body(zagreb_search_json());
        });
        let ctx = context(&temp, &server);

        let err = SearchCommand::new(&ctx, args(" Z ", false))
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, SkycastError::InvalidInput { .. }));
        mock.assert_calls(0);
    }

    #[test]
    fn out_of_range_limit_is_rejected() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        let ctx = context(&temp, &server);
        let search = SearchArgs {
            limit: Some(0),
            ..args("Zagreb", false)
        };

        assert!(SearchCommand::new(&ctx, search)
            .execute(&mut MockUI::new())
            .is_err());
    }

    #[test]
    fn set_default_saves_selected_match() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/search");
            then.status(200).body(zagreb_search_json());
        });
        let ctx = context(&temp, &server);
        let mut ui = MockUI::new();
        ui.set_prompt_response("city", "1");

        let result = SearchCommand::new(&ctx, args("Zagreb", true))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.prompts_shown(), ["city"]);
        assert!(ui.has_success("Zagreb, Serbia"));
        let saved = load_settings(&temp.path().join("config.json")).unwrap();
        assert_eq!(saved.default_city.country.as_deref(), Some("Serbia"));
        assert_eq!(saved.default_city.latitude, 44.23);
    }

    #[test]
    fn set_default_defaults_to_first_match() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/search");
            then.status(200).body(zagreb_search_json());
        });
        let ctx = context(&temp, &server);

        SearchCommand::new(&ctx, args("Zagreb", true))
            .execute(&mut MockUI::new())
            .unwrap();

        let saved = load_settings(&temp.path().join("config.json")).unwrap();
        assert_eq!(saved.default_city.admin.as_deref(), Some("City of Zagreb"));
    }

    #[test]
    fn no_matches_warns() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/search");
            then.status(200).body(r#"{"generationtime_ms":0.4}"#);
        });
        let ctx = context(&temp, &server);
        let mut ui = MockUI::new();

        let result = SearchCommand::new(&ctx, args("Xyzzy", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("No places match \"Xyzzy\""));
        assert!(ui.hints().len() == 1);
    }

    #[test]
    fn upstream_error_fails() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/search");
            then.status(500);
        });
        let ctx = context(&temp, &server);
        let mut ui = MockUI::new();

        let result = SearchCommand::new(&ctx, args("Zagreb", false))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("HTTP 500"));
    }
}
