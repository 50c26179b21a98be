//! Типы записей с замерами времени

/// Один замер из основного CSV: время обоих алгоритмов для матрицы n x n
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    /// Размер квадратной матрицы, n >= 1
    pub size: u32,
    /// Время стандартного (тройной цикл) умножения, мс
    pub standard_ms: f64,
    /// Время алгоритма Штрассена, мс
    pub strassen_ms: f64,
}

/// Замер эталонной (векторизованной) реализации из необязательного CSV
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTimingRecord {
    pub size: u32,
    pub reference_ms: f64,
}

/// Запись основной серии с эталонным значением, подобранным по точному
/// совпадению размера
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedRecord {
    pub size: u32,
    pub standard_ms: f64,
    pub strassen_ms: f64,
    /// None, если эталонного замера для этого n нет
    pub reference_ms: Option<f64>,
}

/// Основная серия замеров плюс разреженно выровненные эталонные значения.
/// Длина всегда равна длине основной серии: размеры, которые есть только
/// в эталонном файле, сюда не попадают.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedSeries {
    pub records: Vec<MergedRecord>,
}

impl MergedSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Размеры основной серии по возрастанию
    pub fn sizes(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.size).collect()
    }

    /// Наибольший замеренный размер; записи упорядочены по возрастанию
    pub fn max_size(&self) -> Option<u32> {
        self.records.last().map(|r| r.size)
    }

    /// Есть ли хотя бы одно выровненное эталонное значение
    pub fn has_reference(&self) -> bool {
        self.records.iter().any(|r| r.reference_ms.is_some())
    }
}
