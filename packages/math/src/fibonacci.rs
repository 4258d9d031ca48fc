/// Iterator that generates Fibonacci numbers.
///
/// Every term that fits in `u64` is yielded; the sequence ends instead of wrapping.
///
/// # Example
///
/// ```
/// use math::fibonacci::Fibonacci;
///
/// // Get first 10 Fibonacci numbers
/// let fibs: Vec<u64> = Fibonacci::new().take(10).collect();
/// assert_eq!(fibs, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
/// ```
pub struct Fibonacci {
    curr: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Fibonacci {
            curr: Some(1),
            next: Some(1),
        }
    }

    /// Start with custom initial values (a, b) where the sequence is a, b, a+b, ...
    pub fn with_start(a: u64, b: u64) -> Self {
        Fibonacci {
            curr: Some(a),
            next: Some(b),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        let following = self.next.and_then(|next| curr.checked_add(next));
        self.curr = self.next;
        self.next = following;
        Some(curr)
    }
}

/// Returns an iterator over Fibonacci numbers starting with 1, 1, 2, 3, 5, ...
pub fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}

/// Returns the nth Fibonacci number (1-indexed: fib(1) = 1, fib(2) = 1, fib(3) = 2, ...).
///
/// Returns None if n is 0 or if the result overflows u64 (n > 93).
///
/// # Example
///
/// ```
/// use math::fibonacci::nth_fibonacci;
///
/// assert_eq!(nth_fibonacci(1), Some(1));
/// assert_eq!(nth_fibonacci(10), Some(55));
/// assert_eq!(nth_fibonacci(0), None);
/// ```
pub fn nth_fibonacci(n: usize) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Fibonacci::new().nth(n - 1)
}

/// Iterator over the even Fibonacci numbers: 2, 8, 34, 144, ...
///
/// Every third Fibonacci number is even, and the even terms satisfy
/// `E(k) = 4 * E(k - 1) + E(k - 2)`, so the odd terms are never generated.
///
/// # Example
///
/// ```
/// use math::fibonacci::EvenFibonacci;
///
/// let evens: Vec<u64> = EvenFibonacci::new().take(5).collect();
/// assert_eq!(evens, vec![2, 8, 34, 144, 610]);
/// ```
pub struct EvenFibonacci {
    curr: Option<u64>,
    next: Option<u64>,
}

impl EvenFibonacci {
    pub fn new() -> Self {
        EvenFibonacci {
            curr: Some(2),
            next: Some(8),
        }
    }
}

impl Default for EvenFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for EvenFibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        let following = self.next.and_then(|next| next.checked_mul(4)?.checked_add(curr));
        self.curr = self.next;
        self.next = following;
        Some(curr)
    }
}

/// Sum of the even Fibonacci terms that do not exceed `limit`.
///
/// # Example
///
/// ```
/// use math::fibonacci::even_fibonacci_sum;
///
/// assert_eq!(even_fibonacci_sum(100), 2 + 8 + 34);
/// assert_eq!(even_fibonacci_sum(4_000_000), 4613732);
/// ```
pub fn even_fibonacci_sum(limit: u64) -> u64 {
    EvenFibonacci::new().take_while(|&n| n <= limit).sum()
}
