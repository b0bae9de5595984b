use std::future::Future;
use std::io;
use std::time::Duration;

use catalog_client::{
    api::ApiClient,
    config::ClientConfig,
    models::Produto,
    state::{App, ViewState},
    view,
};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::ProgressBar;
use inquire::Select;
use tracing::Level;

enum Action {
    Select(i32),
    Back,
    Retry,
    Quit,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let api = match ApiClient::new(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Failed to build API client: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(api);
    with_spinner(app.load_list()).await;

    loop {
        clear_screen();
        println!("Produtos\n");

        let action = match app.state() {
            ViewState::List(produtos) => prompt_list(produtos),
            ViewState::Detail { produto, .. } => prompt_detail(produto),
            ViewState::Error(message) => prompt_error(message),
            // Fetches complete before control returns here.
            ViewState::Loading => Action::Retry,
        };

        match action {
            Action::Select(id) => with_spinner(app.select(id)).await,
            Action::Retry => with_spinner(app.load_list()).await,
            Action::Back => app.back(),
            Action::Quit => break,
        }
    }
}

async fn with_spinner<F: Future<Output = ()>>(fetch: F) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Carregando...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    fetch.await;
    spinner.finish_and_clear();
}

fn prompt_list(produtos: &[Produto]) -> Action {
    if produtos.is_empty() {
        println!("Nenhum produto encontrado.\n");
    }

    let mut options: Vec<String> = produtos.iter().map(view::list_entry).collect();
    options.push("Sair".to_string());

    match Select::new("Selecione um produto:", options).raw_prompt() {
        Ok(choice) if choice.index < produtos.len() => Action::Select(produtos[choice.index].id),
        _ => Action::Quit,
    }
}

fn prompt_detail(produto: &Produto) -> Action {
    println!("{}\n", view::render_detail(produto));

    let options = vec!["Voltar à lista".to_string(), "Sair".to_string()];
    match Select::new("Opções:", options).raw_prompt() {
        Ok(choice) if choice.index == 0 => Action::Back,
        _ => Action::Quit,
    }
}

fn prompt_error(message: &str) -> Action {
    println!("{message}\n");

    let options = vec!["Tentar novamente".to_string(), "Sair".to_string()];
    match Select::new("Opções:", options).raw_prompt() {
        Ok(choice) if choice.index == 0 => Action::Retry,
        _ => Action::Quit,
    }
}

fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0));
}
