//! ledsite CLI
//!
//! 读取一个HTML页面，执行增强管线（翻译、面包屑、性能改写），
//! 把结果写到输出文件或标准输出。

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;
use url::Url;

use ledsite::core::{enhance_document, EnhanceOptions, SiteResult};
use ledsite::env::{EnvVar, LogLevel, NoColor};
use ledsite::i18n::Locale;
use ledsite::perf::ConnectionProfile;

/// 站点默认发布地址，用于从文件名推导页面URL
const DEFAULT_SITE_BASE: &str = "https://www.lianjin-led.com/";

#[derive(Parser)]
#[command(name = "ledsite", version, about = "LED宣传站点的静态页面增强工具")]
struct Cli {
    /// 输入HTML文件；`-` 表示标准输入
    input: String,

    /// 输出文件；缺省写标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 页面发布后的URL；缺省由站点地址加文件名推导
    #[arg(long)]
    page_url: Option<Url>,

    /// 切换到指定语言（en / zh）
    #[arg(short, long)]
    locale: Option<String>,

    /// 浏览器风格语言标签，参与语言检测（如 zh-CN）
    #[arg(long)]
    language_tag: Option<String>,

    /// 语言偏好文件路径
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// 性能配置文件路径
    #[arg(long)]
    perf_config: Option<PathBuf>,

    /// 性能配置远程地址
    #[arg(long)]
    perf_config_url: Option<String>,

    /// 连接类型（如 4g、2g、slow-2g），用于弱网降级
    #[arg(long)]
    effective_connection: Option<String>,

    /// 按省流模式处理
    #[arg(long)]
    save_data: bool,

    /// 跳过翻译
    #[arg(long)]
    no_i18n: bool,

    /// 跳过面包屑
    #[arg(long)]
    no_breadcrumb: bool,

    /// 跳过性能改写
    #[arg(long)]
    no_perf: bool,

    /// 以 HEAD 请求探测WebP替代图
    #[arg(long)]
    probe: bool,

    /// 强制指定文档编码
    #[arg(long)]
    encoding: Option<String>,
}

fn init_logging() {
    let level = match LogLevel::get_or_default().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(!NoColor::get_or_default())
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> SiteResult<()> {
    let data = if cli.input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(&cli.input)?
    };

    let page_url = match &cli.page_url {
        Some(url) => url.clone(),
        None => {
            let filename = if cli.input == "-" {
                "index.html".to_string()
            } else {
                PathBuf::from(&cli.input)
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "index.html".to_string())
            };
            Url::parse(DEFAULT_SITE_BASE)?.join(&filename)?
        }
    };

    let locale = match &cli.locale {
        Some(code) => match Locale::from_code(code) {
            Some(locale) => Some(locale),
            None => {
                // 不支持的语言与浏览器端一致：忽略并保持当前语言
                tracing::warn!("不支持的语言代码: {}", code);
                None
            }
        },
        None => None,
    };

    let connection = cli
        .effective_connection
        .as_ref()
        .map(|effective_type| ConnectionProfile {
            effective_type: effective_type.clone(),
            save_data: cli.save_data,
        })
        .or_else(|| {
            cli.save_data.then(|| ConnectionProfile {
                effective_type: "4g".to_string(),
                save_data: true,
            })
        });

    let options = EnhanceOptions {
        locale,
        language_tag: cli.language_tag.clone(),
        preference_file: cli.prefs.clone(),
        perf_config: cli.perf_config.clone(),
        perf_config_url: cli.perf_config_url.clone(),
        connection,
        no_i18n: cli.no_i18n,
        no_breadcrumb: cli.no_breadcrumb,
        no_perf: cli.no_perf,
        probe_alternate_formats: cli.probe,
        document_encoding: cli.encoding.clone(),
    };

    let output = enhance_document(&data, &page_url, &options)?;

    match &cli.output {
        Some(path) => fs::write(path, output)?,
        None => io::stdout().write_all(&output)?,
    }

    Ok(())
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
