//! Теоретическая модель сложности: n^3 против n^log2(7)

/// Показатель сложности алгоритма Штрассена: log2(7) ≈ 2.807
pub const STRASSEN_EXPONENT: f64 = 2.807_354_922_057_604;

/// Теоретические затраты и выигрыш для одного размера матрицы
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheoreticalPoint {
    pub size: u32,
    /// Операции стандартного алгоритма: n^3
    pub cubic_ops: f64,
    /// Операции алгоритма Штрассена: n^log2(7)
    pub strassen_ops: f64,
    /// cubic_ops / strassen_ops; строго растёт при n >= 2, равно 1 при n = 1
    pub ratio: f64,
    /// (1 - strassen_ops / cubic_ops) * 100; стремится к 100 с ростом n
    pub saving_percent: f64,
}

/// Точка теоретической кривой для размера n >= 1.
/// Чистая функция размера, замеры времени здесь не участвуют.
pub fn theoretical_point(size: u32) -> TheoreticalPoint {
    let n = f64::from(size);
    let cubic_ops = n.powi(3);
    let strassen_ops = n.powf(STRASSEN_EXPONENT);
    TheoreticalPoint {
        size,
        cubic_ops,
        strassen_ops,
        ratio: cubic_ops / strassen_ops,
        saving_percent: (1.0 - strassen_ops / cubic_ops) * 100.0,
    }
}

/// Теоретическая кривая для последовательности размеров
pub fn theoretical_curve(sizes: &[u32]) -> Vec<TheoreticalPoint> {
    sizes.iter().map(|&n| theoretical_point(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exponent_is_log2_of_seven() {
        assert!((STRASSEN_EXPONENT - 7f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn unit_size_has_no_advantage() {
        let p = theoretical_point(1);
        assert_eq!(p.cubic_ops, 1.0);
        assert_eq!(p.strassen_ops, 1.0);
        assert_eq!(p.ratio, 1.0);
        assert_eq!(p.saving_percent, 0.0);
    }

    #[test]
    fn curve_preserves_input_order() {
        let curve = theoretical_curve(&[2, 4, 8]);
        let sizes: Vec<u32> = curve.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![2, 4, 8]);
    }

    #[test]
    fn curve_is_deterministic() {
        let sizes = [2, 16, 128, 1024];
        assert_eq!(theoretical_curve(&sizes), theoretical_curve(&sizes));
    }

    proptest! {
        #[test]
        fn ratio_strictly_increases(n in 2u32..4096) {
            let prev = theoretical_point(n - 1);
            let current = theoretical_point(n);
            prop_assert!(current.ratio > prev.ratio);
        }

        #[test]
        fn saving_stays_within_bounds(n in 2u32..100_000) {
            let p = theoretical_point(n);
            prop_assert!(p.saving_percent > 0.0);
            prop_assert!(p.saving_percent < 100.0);
        }
    }
}
