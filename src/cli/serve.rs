use crate::{config, error, logging, server, spotify::LinkResolver};

pub async fn serve(resolver: LinkResolver, addr: Option<String>) {
    if let Err(e) = logging::init_tracing() {
        error!("Cannot initialise logging. Err: {}", e);
    }

    let addr = addr.unwrap_or_else(config::server_addr);
    if let Err(e) = server::start_api_server(&addr, resolver).await {
        error!("Server stopped. Err: {}", e);
    }
}
