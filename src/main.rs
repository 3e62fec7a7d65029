//! 用户 CRUD 服务入口
//! 平面文件持久化的最小用户管理 API

use std::env;

use tokio::net::TcpListener;
use tracing::{info, Level};

use user_file_api::create_app;
use user_file_api::infrastructure::logger::Logger;
use user_file_api::infrastructure::storage::FileStore;

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    // 从环境变量读取配置
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let file_path = env::var("USERS_FILE").unwrap_or_else(|_| "users.json".to_string());

    info!("启动用户 API 服务器...");

    let store = FileStore::new(&file_path);
    let app = create_app(store);

    let addr = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("无法绑定监听地址");

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /              - 服务状态横幅");
    info!("   GET    /users         - 获取所有用户");
    info!("   GET    /users/search  - 按名称关键字搜索 (?name=keyword)");
    info!("   POST   /users         - 创建新用户");
    info!("   PUT    /users/:id     - 更新用户");
    info!("   DELETE /users/:id     - 删除用户");
    info!("📄 数据文件: {}", file_path);

    axum::serve(listener, app).await.expect("服务器启动失败");
}
