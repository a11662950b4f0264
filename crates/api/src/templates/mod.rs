use maud::{html, Markup, DOCTYPE};

const API_ROUTES: &[(&str, &str)] = &[
    (
        "/api/v1.0/precipitation",
        "precipitation for the most recent year of data",
    ),
    ("/api/v1.0/stations", "all monitoring stations"),
    (
        "/api/v1.0/tobs",
        "temperature observations of the most active station",
    ),
    ("/api/v1.0/{start}", "temperature summary from a start date"),
    (
        "/api/v1.0/{start}/{end}",
        "temperature summary over a date range",
    ),
];

pub fn home_page(api_base: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Hawaii Climate API" }
            }
            body {
                h1 { "Hawaii Climate API" }
                p { "Available routes:" }
                ul {
                    @for (path, description) in API_ROUTES {
                        li {
                            a href=(format!("{}{}", api_base, path)) { (path) }
                            ": " (description)
                        }
                    }
                }
                p {
                    a href=(format!("{}/docs", api_base)) { "API docs" }
                }
            }
        }
    }
}
