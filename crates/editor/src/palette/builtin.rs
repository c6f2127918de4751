use eqn_document::NodeKind;

/// Greek letters. Capitals without a distinct glyph map to Latin letters.
pub(super) const GREEK: &[(&str, &str)] = &[
	("alpha", "\\alpha"),
	("beta", "\\beta"),
	("gamma", "\\gamma"),
	("delta", "\\delta"),
	("epsilon", "\\epsilon"),
	("zeta", "\\zeta"),
	("eta", "\\eta"),
	("theta", "\\theta"),
	("iota", "\\iota"),
	("kappa", "\\kappa"),
	("lambda", "\\lambda"),
	("mu", "\\mu"),
	("nu", "\\nu"),
	("xi", "\\xi"),
	("omicron", "\\omicron"),
	("pi", "\\pi"),
	("rho", "\\rho"),
	("sigma", "\\sigma"),
	("tau", "\\tau"),
	("upsilon", "\\upsilon"),
	("phi", "\\phi"),
	("chi", "\\chi"),
	("psi", "\\psi"),
	("omega", "\\omega"),
	("Alpha", "A"),
	("Beta", "B"),
	("Gamma", "\\Gamma"),
	("Delta", "\\Delta"),
	("Epsilon", "E"),
	("Zeta", "Z"),
	("Eta", "H"),
	("Theta", "\\Theta"),
	("Iota", "I"),
	("Kappa", "K"),
	("Lambda", "\\Lambda"),
	("Mu", "M"),
	("Nu", "N"),
	("Xi", "\\Xi"),
	("Omicron", "O"),
	("Pi", "\\Pi"),
	("Rho", "P"),
	("Sigma", "\\Sigma"),
	("Tau", "T"),
	("Upsilon", "\\Upsilon"),
	("Phi", "\\Phi"),
	("Chi", "X"),
	("Psi", "\\Psi"),
	("Omega", "\\Omega"),
];

/// Operators, relations, arrows and miscellaneous symbols.
pub(super) const SYMBOLS: &[(&str, &str)] = &[
	("times", "\\times"),
	("div", "\\div"),
	("centerdot", "\\cdot"),
	("plusmn", "\\pm"),
	("mnplus", "\\mp"),
	("starf", "\\star"),
	("bigcup", "\\bigcup"),
	("bigcap", "\\bigcap"),
	("cup", "\\cup"),
	("cap", "\\cap"),
	("lt", "\\lt"),
	("gt", "\\gt"),
	("leq", "\\leq"),
	("GreaterEqual", "\\geq"),
	("equals", "="),
	("approx", "\\approx"),
	("NotEqual", "\\ne"),
	("sub", "\\subset"),
	("sup", "\\supset"),
	("sube", "\\subseteq"),
	("supe", "\\supseteq"),
	("nsub", "\\not\\subset"),
	("nsup", "\\not\\supset"),
	("nsube", "\\not\\subseteq"),
	("nsupe", "\\not\\supseteq"),
	("propto", "\\propto"),
	("parallel", "\\parallel"),
	("npar", "\\nparallel"),
	("asympeq", "\\asymp"),
	("isin", "\\in"),
	("notin", "\\notin"),
	("exist", "\\exists"),
	("nexist", "\\nexists"),
	("perp", "\\perp"),
	("Leftarrow", "\\Leftarrow"),
	("Rightarrow", "\\Rightarrow"),
	("Leftrightarrow", "\\iff"),
	("angle", "\\angle"),
	("angmsd", "\\measuredangle"),
	("rightarrow", "\\to"),
	("leftarrow", "\\gets"),
	("leftrightarrow", "\\leftrightarrow"),
	("longrightarrow", "\\longrightarrow"),
	("longleftarrow", "\\longleftarrow"),
	("longleftrightarrow", "\\longleftrightarrow"),
	("uparrow", "\\uparrow"),
	("downarrow", "\\downarrow"),
	("updownarrow", "\\updownarrow"),
	("PartialD", "\\partial"),
	("hbar", "\\hbar"),
	("real", "\\Re"),
	("nabla", "\\nabla"),
	("infin", "\\infty"),
];

/// Three-slot operators rendered as `\cmd_{}^{}{}`.
pub(super) const BIG_OPERATORS: &[&str] = &[
	"sum", "int", "iint", "iiint", "oint", "prod", "coprod", "bigcup", "bigcap", "bigvee", "bigwedge",
];

/// Functions rendered as `\cmd^{}{}`.
pub(super) const TRIG: &[&str] = &[
	"sin", "cos", "tan", "csc", "sec", "cot", "arcsin", "arccos", "arctan",
];

/// Fixed structural nodes.
pub(super) fn functions() -> [(&'static str, NodeKind); 8] {
	[
		("lim", NodeKind::Limit),
		("sqrt", NodeKind::Sqrt),
		("nsqrt", NodeKind::NthRoot),
		("sub", NodeKind::Subscript),
		("sup", NodeKind::Superscript),
		("subsup", NodeKind::SubSup),
		("frac", NodeKind::Fraction),
		("boxed", NodeKind::Frame),
	]
}
