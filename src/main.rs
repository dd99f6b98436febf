#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use std::net::SocketAddr;

    use actix_files::Files;
    use actix_web::middleware::Logger;
    use actix_web::{HttpServer, web};
    use leptos::prelude::*;
    use leptos_actix::{LeptosRoutes, generate_route_list};

    use devnovate::frontend::{App, shell};

    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // `None` defers to cargo-leptos and its LEPTOS_* env vars
    let conf = get_configuration(None).map_err(|e| {
        log::error!("Failed to read leptos configuration: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let mut leptos_options = conf.leptos_options;
    if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
        match bind_addr.parse::<SocketAddr>() {
            Ok(addr) => leptos_options.site_addr = addr,
            Err(e) => log::warn!("Ignoring BIND_ADDR {:?}: {}", bind_addr, e),
        }
    }
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    log::info!("Devnovate listening on http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(App);
        let options = leptos_options.clone();

        actix_web::App::new()
            .wrap(Logger::default())
            .service(Files::new("/pkg", format!("{}/pkg", site_root)))
            .leptos_routes(routes, move || shell(options.clone()))
            .app_data(web::Data::new(leptos_options.clone()))
    })
    .bind(addr)
    .inspect_err(|e| log::error!("Failed to bind {}: {}", addr, e))?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The client bundle boots through `devnovate::hydrate`
}
