//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod http;

pub use adapters::{
    ElevenLabsClient, EnvCredentials, FileBlobStore, HttpVoiceApiClient, VercelBlobStore,
};

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;

    /// 在随机端口上启动路由，返回 base URL
    pub async fn spawn_router(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
