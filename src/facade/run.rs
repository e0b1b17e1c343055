use std::env;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use stat_cli_core::{ReportRenderer, renderer_for, utils::fmt_num};
use stat_config::{
    ConfigLoader, LabConfig, validate_delimiter, validate_histogram_bins, validate_precision,
};
use stat_core::{Report, ReportOptions, Sample, percentile};

use super::args::{InitArgs, InputArgs, PercentileArgs, ReportArgs, StatLabCLI};
use super::logging::init_logging;

/// 解析配置、初始化日志并执行子命令，输出写入 `out`
pub fn dispatch(cli: StatLabCLI, out: &mut dyn Write) -> Result<()> {
    match cli {
        StatLabCLI::Report(args) => {
            let conf = prepare(&args.input)?;
            run_report(&args, &conf, out)
        }
        StatLabCLI::Percentile(args) => {
            let conf = prepare(&args.input)?;
            run_percentile(&args, &conf, out)
        }
        StatLabCLI::Init(args) => {
            init_logging(None, Default::default());
            run_init(&args, out)
        }
    }
}

fn prepare(input: &InputArgs) -> Result<LabConfig> {
    let conf = load_conf(input)?;
    init_logging(input.log_profile, conf.log_conf().level);
    Ok(conf)
}

pub fn load_conf(input: &InputArgs) -> Result<LabConfig> {
    match &input.conf {
        Some(path) => LabConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {:?}", path)),
        None => {
            let cwd = env::current_dir().context("failed to get current directory")?;
            LabConfig::load_or_default(&cwd)
                .with_context(|| format!("failed to load config from {:?}", cwd))
        }
    }
}

pub fn run_report(args: &ReportArgs, conf: &LabConfig, out: &mut dyn Write) -> Result<()> {
    // 命令行覆盖值与配置文件走同一套校验
    if let Some(bins) = args.bins {
        validate_histogram_bins(bins).context("invalid --bins")?;
    }
    if let Some(precision) = args.precision {
        validate_precision(precision).context("invalid --precision")?;
    }
    let sample = read_sample(&args.input, conf)?;

    let report_conf = conf.report();
    let mut extra = report_conf.extra_percentiles.clone();
    extra.extend(args.percentiles.iter().copied());
    let opts = ReportOptions {
        histogram_bins: args.bins.unwrap_or(report_conf.histogram_bins),
        extra_percentiles: extra,
    };
    let report = Report::build(sample, &opts).context("failed to compute statistics")?;

    let format = args.format.unwrap_or(report_conf.format);
    let precision = args.precision.unwrap_or(report_conf.precision);
    renderer_for(format, precision)
        .render(&report, out)
        .context("failed to write report")?;
    log::info!(
        "rendered {} report for {} values",
        format,
        report.summary.count
    );
    Ok(())
}

pub fn run_percentile(args: &PercentileArgs, conf: &LabConfig, out: &mut dyn Write) -> Result<()> {
    if let Some(precision) = args.precision {
        validate_precision(precision).context("invalid --precision")?;
    }
    let sample = read_sample(&args.input, conf)?;
    let value = percentile(&sample, args.p)?;
    let precision = args.precision.unwrap_or(conf.report().precision);
    writeln!(out, "p{} = {}", args.p, fmt_num(value, precision))?;
    Ok(())
}

pub fn run_init(args: &InitArgs, out: &mut dyn Write) -> Result<()> {
    let path = LabConfig::init_in(&args.dir, args.force)
        .with_context(|| format!("failed to init config in {:?}", args.dir))?;
    writeln!(out, "Created {}", path.display())?;
    Ok(())
}

/// 输入优先级：`--values` > `--file` > 配置 `[input].file` > 配置 `[input].default_values`
///
/// 仅文件与 stdin 输入允许按行书写，换行等同于分隔符。
pub fn read_sample(input: &InputArgs, conf: &LabConfig) -> Result<Sample> {
    let delimiter = match &input.delimiter {
        Some(d) => {
            validate_delimiter(d)?;
            d.chars().next().unwrap_or(',')
        }
        None => conf.input().delimiter_char(),
    };

    let text = if let Some(values) = &input.values {
        values.clone()
    } else if let Some(file) = &input.file {
        lines_to_delimited(read_text(file)?, delimiter)
    } else if let Some(file) = &conf.input().file {
        lines_to_delimited(read_text(file)?, delimiter)
    } else {
        log::debug!("no input given, using [input].default_values");
        conf.input().default_values.clone()
    };
    Ok(Sample::parse(&text, delimiter)?)
}

fn lines_to_delimited(text: String, delimiter: char) -> String {
    if delimiter == '\n' {
        text.replace('\r', "")
    } else {
        text.replace(['\r', '\n'], &delimiter.to_string())
    }
}

fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read input {:?}", path))
}
