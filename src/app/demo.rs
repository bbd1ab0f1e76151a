use crate::app::report::{format_inline, Report, ReportLine, Section};
use crate::config::toml_config::{CallSpec, DemoConfig};
use crate::core::numbers::{is_prime, sum_even_numbers};
use crate::core::pricing::{quote_call, zones};
use crate::core::sequences::{fizz_buzz, generate_fibonacci};
use crate::core::text::{is_palindrome_with, Normalization};
use crate::utils::error::Result;

pub fn fibonacci_section(n: i64) -> Section {
    let terms = format_inline(&generate_fibonacci(n));

    let mut section = Section::new("Parte 1 - Serie de Fibonacci");
    section.push(ReportLine::new(
        n.to_string(),
        terms.clone(),
        format!("Primeros {} términos: {}", n, terms),
    ));
    section
}

pub fn primes_section(values: &[i64]) -> Section {
    let mut section = Section::new("Parte 1 - Números Primos");
    for &value in values {
        let verdict = if is_prime(value) { "primo" } else { "no primo" };
        section.push(ReportLine::new(
            value.to_string(),
            verdict,
            format!("{} => {}", value, verdict),
        ));
    }
    section
}

pub fn palindromes_section(texts: &[String], normalization: Normalization) -> Section {
    let normalizer = normalization.normalizer();

    let mut section = Section::new("Parte 1 - Palíndromos");
    for text in texts {
        let verdict = if is_palindrome_with(text, normalizer) {
            "sí"
        } else {
            "no"
        };
        section.push(ReportLine::new(
            text.as_str(),
            verdict,
            format!("\"{}\" => {}", text, verdict),
        ));
    }
    section
}

pub fn even_sum_section(numbers: &[i64]) -> Section {
    let array = format_inline(numbers);
    let sum = sum_even_numbers(numbers);

    let mut section = Section::new("Parte 2 - Suma de Números Pares en Arreglo");
    section.push(ReportLine::new(
        "arreglo",
        array.clone(),
        format!("Arreglo: {}", array),
    ));
    section.push(ReportLine::new(
        "suma_pares",
        sum.to_string(),
        format!("Suma de pares: {}", sum),
    ));
    section
}

/// 任何一通無效的通話都會讓整個區段失敗，不輸出部分結果
pub fn call_cost_section(calls: &[CallSpec]) -> Result<Section> {
    let mut section = Section::new("Parte 2 - Costo de Llamadas Internacionales");
    for call in calls {
        let quote = quote_call(call.zone, call.minutes)?;
        let total = quote.total;

        tracing::debug!(
            "Call zone={} minutes={} total={}",
            call.zone,
            call.minutes,
            total
        );

        section.push(ReportLine::new(
            format!("{}:{}", call.zone, call.minutes),
            total.to_string(),
            format!(
                "Zona: {} (clave {}) | Minutos: {} => Total: ${}",
                quote.zone.name_es,
                call.zone,
                call.minutes,
                total.to_grouped_string()
            ),
        ));
    }
    Ok(section)
}

pub fn fizzbuzz_section(n: i64) -> Result<Section> {
    let labels = format_inline(&fizz_buzz(n)?);

    let mut section = Section::new(format!("Parte 2 - FizzBuzz (n = {})", n));
    section.push(ReportLine::new(n.to_string(), labels.clone(), labels));
    Ok(section)
}

pub fn zones_section() -> Section {
    let mut section = Section::new("Zonas Registradas");
    for z in zones() {
        section.push(ReportLine::new(
            z.key.to_string(),
            z.price_per_minute.to_string(),
            format!(
                "{} => {} (${} por minuto)",
                z.key, z.name_es, z.price_per_minute
            ),
        ));
    }
    section
}

/// 依配置執行所有練習，產生完整的示範報表
pub fn build_report(config: &DemoConfig) -> Result<Report> {
    tracing::info!("🚀 Building demo report");

    let sections = vec![
        fibonacci_section(config.fibonacci.terms),
        primes_section(&config.primes.values),
        palindromes_section(&config.palindromes.texts, config.palindromes.normalization),
        even_sum_section(&config.even_sum.numbers),
        call_cost_section(&config.call_cost.calls)?,
        fizzbuzz_section(config.fizzbuzz.n)?,
    ];

    tracing::info!("✅ Demo report built with {} sections", sections.len());
    Ok(Report { sections })
}
