//! コンソール実装（標準出力・標準エラー / テスト用バッファ）

use crate::ports::outbound::Console;
use std::io::Write;
use std::sync::Mutex;

/// println! / eprintln! に委譲する Console
#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn out(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        // パイプ先が閉じていてもパニックさせない
        let _ = writeln!(lock, "{}", line);
    }

    fn err(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// 出力を溜めておく Console（テスト用）
#[derive(Debug, Default)]
pub struct BufferConsole {
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// 標準出力に書かれた行
    pub fn out_lines(&self) -> Vec<String> {
        self.out.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// 標準エラーに書かれた行
    pub fn err_lines(&self) -> Vec<String> {
        self.err.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// 標準出力を改行で連結したもの
    pub fn stdout(&self) -> String {
        self.out_lines().join("\n")
    }
}

impl Console for BufferConsole {
    fn out(&self, line: &str) {
        if let Ok(mut v) = self.out.lock() {
            v.push(line.to_string());
        }
    }

    fn err(&self, line: &str) {
        if let Ok(mut v) = self.err.lock() {
            v.push(line.to_string());
        }
    }
}
