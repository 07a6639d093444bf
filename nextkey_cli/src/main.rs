use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nextkey_core::{
    LocalPredictor, PredictionMode, PredictorConfig, PredictorService, RemotePredictor, Tier,
    key_event::{Action, InputEvent},
    session::TypingSession,
};
use nextkey_model::{Lexicon, LocalModel};
use nextkey_remote::GeminiPredictor;

/// 交互式下一字符预测演示。
#[derive(Debug, Parser)]
#[command(name = "nextkey", version)]
struct Args {
    /// JSON 配置文件；不存在时使用默认配置
    #[arg(long, default_value = "nextkey.json")]
    config: PathBuf,
    /// 预测模式，覆盖配置文件
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// 额外词典（TSV：word<TAB>weight），与内置词表合并
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// 不创建远端适配器
    #[arg(long)]
    no_remote: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// 只用本地模型
    LocalOnly,
    /// 优先远端，失败回退本地
    RemotePreferred,
    /// 远端优先占位，本地补足
    Hybrid,
}

impl From<ModeArg> for PredictionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::LocalOnly => Self::LocalOnly,
            ModeArg::RemotePreferred => Self::RemotePreferred,
            ModeArg::Hybrid => Self::Hybrid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = PredictorConfig::load_from(&args.config)?;
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    let mut lexicon = Lexicon::builtin();
    if let Some(path) = &args.lexicon {
        let extra = Lexicon::from_path(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?;
        log::info!("loaded {} words from {}", extra.len(), path.display());
        lexicon.extend(extra);
    }

    let service = PredictorService::from_config(&config, LocalModel::with_lexicon(lexicon));
    if args.no_remote || config.mode == PredictionMode::LocalOnly {
        return repl(&service, config.mode).await;
    }
    match GeminiPredictor::new(&config.remote) {
        Ok(gemini) => {
            log::info!("remote predictor: {}", gemini.model());
            repl(&service.with_remote(gemini), config.mode).await
        }
        Err(err) => {
            log::warn!("remote predictor unavailable, using local model only: {err}");
            repl(&service, config.mode).await
        }
    }
}

async fn repl<L, R>(service: &PredictorService<L, R>, mode: PredictionMode) -> Result<()>
where
    L: LocalPredictor,
    R: RemotePredictor,
{
    let mut out = io::stdout();
    let mut line = String::new();
    let mut session = TypingSession::new();
    let remote = if service.has_remote() { "on" } else { "off" };
    writeln!(out, "nextkey demo | mode: {mode:?} | remote: {remote}")?;
    writeln!(
        out,
        "输入文本后回车追加；1-4 采纳预测；:sp 追加空格；:bs 退格；0 清空；:stats 统计；:reset 清空缓存；:q 退出。"
    )?;

    loop {
        let request = session.begin_request();
        let outcome = service.predict_detailed(&request.text, true).await;
        let tier = outcome.tier;
        session.apply(request.seq, outcome.predictions);
        show(&mut out, &session, tier)?;

        line.clear();
        print!("text> ");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        // 只去掉换行，保留用户输入的空格
        let input = line.trim_end_matches(['\r', '\n']);
        let events = match input {
            ":q" | ":quit" | ":exit" => break,
            ":stats" => {
                writeln!(out, "{:?} | cached: {}", service.stats(), service.cache_len())?;
                continue;
            }
            ":reset" => {
                service.clear_cache();
                writeln!(out, "(缓存已清空)")?;
                continue;
            }
            "" => continue,
            "0" => vec![InputEvent::Clear],
            ":sp" => vec![InputEvent::Char(' ')],
            ":bs" => vec![InputEvent::Backspace],
            sel @ ("1" | "2" | "3" | "4") => {
                let n: usize = sel.parse()?;
                if n > session.offered().len() {
                    writeln!(out, "无效选择：当前只有 {} 个预测", session.offered().len())?;
                    continue;
                }
                vec![InputEvent::Accept(n - 1)]
            }
            text => text.chars().map(InputEvent::Char).collect(),
        };

        for event in events {
            for action in session.handle(event) {
                let Action::Keystroke(record) = action;
                log::debug!("keystroke: {record:?}");
            }
        }
    }

    Ok(())
}

fn show(out: &mut impl Write, session: &TypingSession, tier: Tier) -> io::Result<()> {
    writeln!(out, "--------------------")?;
    writeln!(out, "> {}|", session.text())?;
    if session.offered().is_empty() {
        return writeln!(out, "  (无预测)");
    }
    for (i, p) in session.offered().iter().enumerate() {
        let shown = if p.letter == ' ' {
            "␣".to_string()
        } else {
            p.letter.to_string()
        };
        writeln!(out, "{}. {shown}\t{:.2}", i + 1, p.confidence)?;
    }
    writeln!(out, "  ({tier:?})")
}
