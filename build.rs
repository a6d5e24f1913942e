fn main() {
    // 仅在启用 Tauri 桌面壳时生成上下文
    #[cfg(feature = "tauri-app")]
    tauri_build::build();
}
