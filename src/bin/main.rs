// Mentor directory web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - The mentor roster endpoint for the directory page
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use mentor_directory::web_app::api::config::HostConfig;
    use mentor_directory::web_app::api::roster::{self, Roster};
    use mentor_directory::web_app::app::{shell, App as WebApp};
    use tracing_subscriber::EnvFilter;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables and the roster
    let config = HostConfig::from_env();
    let roster = Roster::load(&config.mentors_file).expect("Failed to load mentor roster");
    let roster = web::Data::new(roster);

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).expect("could not read configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            .app_data(roster.clone())
            // Directory requests must win over the page route at the same path
            .configure(roster::configure)
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
