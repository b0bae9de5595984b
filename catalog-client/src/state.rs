//! View state machine for the catalog UI.
//!
//! The four states are mutually exclusive by construction; exactly one of
//! spinner, error panel, detail panel or list is ever renderable.

use crate::{api::ApiClient, error::ClientError, models::Produto};

pub const ERRO_LISTA: &str = "Falha ao carregar produtos. Verifique se o servidor está rodando.";
pub const ERRO_DETALHE: &str = "Falha ao carregar detalhes do produto.";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    List(Vec<Produto>),
    Detail { list: Vec<Produto>, produto: Produto },
}

/// Issued when a fetch starts; a completion is applied only while its token
/// is still the latest, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

pub struct App {
    api: ApiClient,
    state: ViewState,
    seq: u64,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: ViewState::Loading,
            seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub async fn load_list(&mut self) {
        let token = self.start_list_fetch();
        let result = self.api.list_produtos().await;
        self.finish_list_fetch(token, result);
    }

    pub async fn select(&mut self, id: i32) {
        let Some((token, list)) = self.start_detail_fetch() else {
            return;
        };
        let result = self.api.get_produto(id).await;
        self.finish_detail_fetch(token, list, result);
    }

    pub fn back(&mut self) {
        let state = std::mem::replace(&mut self.state, ViewState::Loading);
        self.state = match state {
            ViewState::Detail { list, .. } => ViewState::List(list),
            other => other,
        };
    }

    pub fn start_list_fetch(&mut self) -> FetchToken {
        self.state = ViewState::Loading;
        self.next_token()
    }

    // Every completion leaves Loading, success or not.
    pub fn finish_list_fetch(
        &mut self,
        token: FetchToken,
        result: Result<Vec<Produto>, ClientError>,
    ) {
        if !self.is_current(token) {
            tracing::debug!("Discarding stale list response");
            return;
        }

        self.state = match result {
            Ok(produtos) => ViewState::List(produtos),
            Err(e) => {
                tracing::error!("Erro ao buscar produtos: {}", e);
                ViewState::Error(ERRO_LISTA.to_string())
            }
        };
    }

    /// Hands the loaded list to the in-flight operation so "back" after a
    /// successful detail fetch needs no re-fetch. Returns `None` when no
    /// list is loaded, in which case nothing changes.
    pub fn start_detail_fetch(&mut self) -> Option<(FetchToken, Vec<Produto>)> {
        match std::mem::replace(&mut self.state, ViewState::Loading) {
            ViewState::List(list) | ViewState::Detail { list, .. } => {
                Some((self.next_token(), list))
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    pub fn finish_detail_fetch(
        &mut self,
        token: FetchToken,
        list: Vec<Produto>,
        result: Result<Produto, ClientError>,
    ) {
        if !self.is_current(token) {
            tracing::debug!("Discarding stale detail response");
            return;
        }

        self.state = match result {
            Ok(produto) => ViewState::Detail { list, produto },
            Err(e) => {
                tracing::error!("Erro ao buscar detalhes do produto: {}", e);
                ViewState::Error(ERRO_DETALHE.to_string())
            }
        };
    }

    fn next_token(&mut self) -> FetchToken {
        self.seq += 1;
        FetchToken(self.seq)
    }

    fn is_current(&self, token: FetchToken) -> bool {
        token == FetchToken(self.seq)
    }
}
