//! Raw signature tables. Pure data; compiled once by [`super::library`].
//!
//! All patterns are compiled case-insensitively. `.` never crosses a newline, so
//! multi-word hints such as `nested.*loop` must appear on one line. Keyword signatures
//! are anchored with `\b` on the left so `left_ptr` matches `left` but `cleft` does not.

use mentor_core::ComplexityClass;

use super::categories::{AlgorithmCategory, CodingPattern, DataStructureKind};

pub const ALGORITHM_SIGNATURES: &[(AlgorithmCategory, &[&str])] = &[
    (
        AlgorithmCategory::DynamicProgramming,
        &[
            r"\bdp\[",
            r"\bmemo\[",
            r"\bcache\[",
            r"@lru_cache",
            r"@cache\b",
            r"tabulation",
            r"\bmemoi[sz]",
        ],
    ),
    (
        AlgorithmCategory::Greedy,
        &[
            r"greedy",
            r"local.*optimal",
            r"sort.*reverse",
            r"heappush",
            r"heappop",
            r"priority.?queue",
        ],
    ),
    (
        AlgorithmCategory::DivideAndConquer,
        &[
            r"divide.*conquer",
            r"merge.?sort",
            r"quick.?sort",
            r"binary.?search",
            r"recursion.*half",
        ],
    ),
    (
        AlgorithmCategory::Backtracking,
        &[
            r"backtrack",
            r"dfs.*return",
            r"recursive.*choice",
            r"restore.*state",
            r"prune.*branch",
        ],
    ),
    (
        AlgorithmCategory::SlidingWindow,
        &[
            r"sliding.?window",
            r"two.?pointer",
            r"\bleft\b.*\bright\b",
            r"window.?size",
            r"expand.*contract",
        ],
    ),
    (
        AlgorithmCategory::TreeTraversal,
        &[
            r"inorder",
            r"preorder",
            r"postorder",
            r"level.?order",
            r"\bbfs",
            r"\bdfs",
            r"queue\.append",
            r"stack\.append",
        ],
    ),
    (
        AlgorithmCategory::GraphAlgorithms,
        &[
            r"dijkstra",
            r"bellman.?ford",
            r"floyd.?warshall",
            r"union.?find",
            r"topological.?sort",
            r"adjacency",
        ],
    ),
];

pub const DATA_STRUCTURE_SIGNATURES: &[(DataStructureKind, &[&str])] = &[
    (
        DataStructureKind::Array,
        &[
            r"\blist\[",
            r"\barray\[",
            r"\[\]",
            r"\bappend\(",
            r"\bpush\(",
            r"\bpop\(",
            r"\bvec!\[",
            r"\bVec<",
            r"\bArrayList\b",
            r"\bnums\b",
            r"\barr\b",
        ],
    ),
    (
        DataStructureKind::HashTable,
        &[
            r"\bdict\(",
            r"defaultdict",
            r"(?-i:\bCounter\b)",
            r"\bset\(",
            r"=\s*\{\s*\}",
            r"\bHash(?:Map|Set)\b",
            r"\bnew\s+(?:Map|Set)\b",
            r"\bDictionary<",
            r"\bmap\[",
            r"\bmake\(map",
        ],
    ),
    (
        DataStructureKind::LinkedList,
        &[r"\bListNode\b", r"\.next\b", r"\bhead\b", r"\btail\b", r"\bLinkedList\b"],
    ),
    (DataStructureKind::Stack, &[r"\bstack", r"\blifo\b"]),
    (
        DataStructureKind::Queue,
        &[r"\bqueue", r"\bdeque", r"popleft", r"appendleft", r"\bfifo\b"],
    ),
    (
        DataStructureKind::Heap,
        &[
            r"heapq",
            r"heappush",
            r"heappop",
            r"heapify",
            r"priority.?queue",
            r"\bBinaryHeap\b",
        ],
    ),
    (
        DataStructureKind::Tree,
        &[
            r"\bTreeNode\b",
            r"\.left\b",
            r"\.right\b",
            r"\broot\b",
            r"\bleaf",
        ],
    ),
    (
        DataStructureKind::Graph,
        &[
            r"\bgraph",
            r"adjacency",
            r"\bedges\b",
            r"\bvertices\b",
            r"\bneighbou?rs\b",
        ],
    ),
];

pub const CODING_PATTERN_SIGNATURES: &[(CodingPattern, &[&str])] = &[
    (CodingPattern::TwoPointers, &[r"\bleft", r"\bright", r"two.?pointer"]),
    (CodingPattern::SlidingWindow, &[r"\bwindow", r"\bexpand", r"\bcontract"]),
    (
        CodingPattern::FastSlowPointers,
        &[r"\bslow", r"\bfast", r"\btortoise", r"\bhare\b"],
    ),
    (CodingPattern::MergeIntervals, &[r"interval", r"overlap"]),
    (
        CodingPattern::CyclicSort,
        &[r"cyclic", r"\bcycle\b", r"correct.?pos"],
    ),
    (
        CodingPattern::TreeDfs,
        &[r"\bdfs", r"\bdepth", r"preorder", r"inorder", r"postorder"],
    ),
    (
        CodingPattern::TreeBfs,
        &[r"\bbfs", r"breadth", r"level.?order", r"\blevel\b"],
    ),
    (
        CodingPattern::TopologicalSort,
        &[r"topolog", r"in.?degree", r"out.?degree", r"\bkahn"],
    ),
    (
        CodingPattern::BinarySearch,
        &[r"\bbinary", r"\bmid\b", r"\bmiddle\b", r"\bbisect"],
    ),
    (CodingPattern::ModifiedBinarySearch, &[r"rotated", r"\bpivot"]),
];

/// Signatures that turn a single loop into `O(n log n)`.
pub const SORT_OR_HEAP_SIGNATURES: &[&str] = &[
    r"sort",
    r"heappush",
    r"heappop",
    r"heapify",
    r"priority.?queue",
    r"\bBinaryHeap\b",
];

/// Container construction; any match makes space `O(n)` on the structural path.
pub const CONTAINER_SIGNATURES: &[&str] = &[
    r"\b(?:dict|set|list|deque|defaultdict|Counter)\(",
    r"=\s*\[",
    r"=\s*\{\s*\}",
    r"\bnew\s+(?:Array|Map|Set|HashMap|HashSet|ArrayList|LinkedList|Dictionary|List|Stack|Queue|ArrayDeque|PriorityQueue)\b",
    r"\bnew\s+\w+\s*\[",
    r"\b(?:Vec|VecDeque|HashMap|HashSet|BTreeMap|BTreeSet)::(?:new|with_capacity)",
    r"\bvec!\[",
    r"\bmake\(",
    r"\[\]\w+\{",
    r"\barray\(",
];

/// Textual time-complexity hints for the fallback path, checked in this order.
pub const TIME_HINTS: &[(ComplexityClass, &[&str])] = &[
    (ComplexityClass::O1, &[r"constant.*time", r"single.*operation"]),
    (
        ComplexityClass::OLogN,
        &[r"binary.*search", r"tree.*height", r"heap.*operation"],
    ),
    (
        ComplexityClass::ON,
        &[r"linear.*search", r"single.*loop", r"one.*pass"],
    ),
    (
        ComplexityClass::ONLogN,
        &[r"merge.*sort", r"heap.*sort", r"sort\("],
    ),
    (
        ComplexityClass::ON2,
        &[r"nested.*loop", r"double.*loop", r"quadratic"],
    ),
    (
        ComplexityClass::O2N,
        &[r"exponential", r"all.*subsets", r"brute.*force"],
    ),
];

/// Textual space-complexity hints for the fallback path, checked in this order.
pub const SPACE_HINTS: &[(ComplexityClass, &[&str])] = &[
    (ComplexityClass::O1, &[r"constant.*space", r"in[ _-]?place"]),
    (
        ComplexityClass::ON,
        &[r"auxiliary.*array", r"recursion.*stack", r"hash.*table"],
    ),
    (
        ComplexityClass::ON2,
        &[r"2d.*array", r"matrix", r"nested.*structure"],
    ),
];

/// Fallback defaults when no hint matches.
pub const DEFAULT_FALLBACK_TIME: ComplexityClass = ComplexityClass::ON;
pub const DEFAULT_FALLBACK_SPACE: ComplexityClass = ComplexityClass::O1;
