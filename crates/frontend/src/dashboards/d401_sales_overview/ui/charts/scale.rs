//! Чистая геометрия графиков: линейная шкала, деления оси, раскладка
//! категорий по полосам, сборка координат для polyline.

/// Линейное отображение домена значений в координаты SVG.
/// Диапазон может быть перевёрнут (ось Y в SVG растёт вниз).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}

/// Шаг делений: 1/2/5 на степень десяти, ближайший к span/count
fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    if norm < 1.5 {
        magnitude
    } else if norm < 3.0 {
        2.0 * magnitude
    } else if norm < 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Деления оси, накрывающие [min, max] целым числом шагов
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if min == max {
        // вырожденный домен растягиваем на единицу вокруг значения
        return nice_ticks(min - 0.5, max + 0.5, count);
    }
    let (min, max) = if min < max { (min, max) } else { (max, min) };
    let step = nice_step(max - min, count);
    let start = (min / step).floor() as i64;
    let end = (max / step).ceil() as i64;
    (start..=end).map(|i| i as f64 * step).collect()
}

/// Шкала по набору значений с "красивым" доменом по границам делений.
/// Пустой набор даёт домен 0..1.
pub fn value_scale(
    values: &[f64],
    include_zero: bool,
    count: usize,
    range: (f64, f64),
) -> (LinearScale, Vec<f64>) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }
    if !min.is_finite() || !max.is_finite() {
        min = 0.0;
        max = 1.0;
    }
    if include_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    let ticks = nice_ticks(min, max, count);
    let domain = (
        ticks.first().copied().unwrap_or(0.0),
        ticks.last().copied().unwrap_or(1.0),
    );
    (LinearScale::new(domain, range), ticks)
}

/// Центры полос для n категорий на отрезке [left, right]
pub fn band_centers(n: usize, left: f64, right: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = (right - left) / n as f64;
    (0..n).map(|i| left + step * (i as f64 + 0.5)).collect()
}

/// Строки координат для polyline. Пропуск значения (`None`) режет линию;
/// отрезки из одной точки отбрасываются, такие точки рисуются кружками.
pub fn polyline_segments(xs: &[f64], values: &[Option<f64>], scale: &LinearScale) -> Vec<String> {
    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for (x, value) in xs.iter().zip(values) {
        match value {
            Some(v) => current.push((*x, scale.apply(*v))),
            None => {
                if current.len() > 1 {
                    segments.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        segments.push(current);
    }

    segments
        .iter()
        .map(|segment| {
            segment
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_maps_domain_to_range() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 50.0);
        // перевёрнутый диапазон, как у оси Y в SVG
        let inverted = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(inverted.apply(0.0), 100.0);
        assert_eq!(inverted.apply(10.0), 0.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 50.0);
    }

    #[test]
    fn test_nice_ticks_cover_domain() {
        let ticks = nice_ticks(0.0, 28_000_000.0, 5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&30_000_000.0));
        assert_eq!(ticks[1] - ticks[0], 5_000_000.0);
    }

    #[test]
    fn test_nice_ticks_negative_range() {
        let ticks = nice_ticks(-14.1, 22.0, 5);
        assert!(*ticks.first().unwrap() <= -14.1);
        assert!(*ticks.last().unwrap() >= 22.0);
    }

    #[test]
    fn test_value_scale_includes_zero_for_bars() {
        let (scale, ticks) = value_scale(&[5.0, 10.0], true, 5, (100.0, 0.0));
        assert_eq!(ticks[0], 0.0);
        assert_eq!(scale.apply(0.0), 100.0);
    }

    #[test]
    fn test_value_scale_empty_values() {
        let (_, ticks) = value_scale(&[], false, 5, (100.0, 0.0));
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(*ticks.last().unwrap() >= 1.0);
    }

    #[test]
    fn test_band_centers() {
        let xs = band_centers(2, 0.0, 100.0);
        assert_eq!(xs, vec![25.0, 75.0]);
        assert!(band_centers(0, 0.0, 100.0).is_empty());
    }

    #[test]
    fn test_polyline_segments_split_on_gap() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 10.0));
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let values = [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)];
        let segments = polyline_segments(&xs, &values, &scale);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], "0.0,1.0 1.0,2.0");
        assert_eq!(segments[1], "3.0,3.0 4.0,4.0");
    }

    #[test]
    fn test_polyline_drops_isolated_points() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 10.0));
        let xs = [0.0, 1.0, 2.0];
        let values = [None, Some(2.0), None];
        assert!(polyline_segments(&xs, &values, &scale).is_empty());
    }
}
