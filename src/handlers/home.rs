//! Route directory served at `/`.

use axum::response::Html;

const ROUTES_HTML: &str = "Available routes: <br/>\
/api/v1.0/precipitation<br/>\
~ Query dates and temperatures from the last year (8/23/2016)<br/>\
/api/v1.0/stations<br/>\
~ List of stations (every station in the dataset, unfiltered)<br/>\
/api/v1.0/tobs<br/>\
~ List of Temperature Observations from the last year (8/23/2016)<br/>\
/api/v1.0/start/&lt;date&gt;<br/>\
~ Returns Minimum, Maximum, and Average Temperatures for a given date<br/>\
/api/v1.0/start_end/&lt;start&gt;/&lt;end&gt;<br/>\
~ Returns Minimum, Maximum, and Average Temperatures for a given period<br/>\
/heartbeat<br/>\
~ Server status and dataset size<br/>";

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    Html(ROUTES_HTML)
}
