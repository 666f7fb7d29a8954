use super::Function;

const fn func(name: &'static str, syntax: &'static str, description: &'static str) -> Function {
    Function {
        name,
        syntax,
        description,
    }
}

pub static CALCULATION_FUNCTIONS: &[Function] = &[
    func("BASE64", "BASE64(value)", "Returns Base64 encoded string of binary data"),
    func("CONCAT", "CONCAT(str1, str2, ...)", "Concatenates multiple strings into one"),
    func(
        "DATEFORMAT",
        "DATEFORMAT(timestamp, 'format')",
        "Formats timestamp to readable form. Format: yyyy-MM-dd HH:mm:ss",
    ),
    func("DOUBLE", "DOUBLE(value)", "Converts value to double data type"),
    func("LONG", "LONG(value)", "Converts value to long integer"),
    func("LOWER", "LOWER(string)", "Returns lowercase version of string"),
    func("UPPER", "UPPER(string)", "Returns uppercase version of string"),
    func("NOW", "NOW()", "Returns current time in milliseconds since epoch"),
    func(
        "PARSEDATETIME",
        "PARSEDATETIME('time reference')",
        "Parses time reference (e.g., '1 hour ago', 'now')",
    ),
    func(
        "PARSETIMESTAMP",
        "PARSETIMESTAMP('datetime', 'format')",
        "Converts datetime string to UNIX epoch",
    ),
    func(
        "REPLACEALL",
        "REPLACEALL(string, 'regex', 'replacement')",
        "Replace all regex matches",
    ),
    func(
        "REPLACEFIRST",
        "REPLACEFIRST(string, 'regex', 'replacement')",
        "Replace first regex match",
    ),
    func("STR", "STR(value)", "Converts any value to string"),
    func("STRLEN", "STRLEN(string)", "Returns length of string"),
    func(
        "STRPOS",
        "STRPOS(string, 'substring')",
        "Returns position of substring (0-indexed, -1 if not found)",
    ),
    func(
        "SUBSTRING",
        "SUBSTRING(string, start, length)",
        "Extracts substring from string",
    ),
    func("UTF8", "UTF8(payload)", "Converts byte array to UTF-8 string"),
];

pub static AGGREGATION_FUNCTIONS: &[Function] = &[
    func("COUNT", "COUNT(*) or COUNT(field)", "Returns count of rows"),
    func("SUM", "SUM(field)", "Returns sum of numeric field"),
    func("AVG", "AVG(field)", "Returns average of numeric field"),
    func("MIN", "MIN(field)", "Returns minimum value"),
    func("MAX", "MAX(field)", "Returns maximum value"),
    func("FIRST", "FIRST(field)", "Returns first value in aggregate"),
    func("LAST", "LAST(field)", "Returns last value in aggregate"),
    func("UNIQUECOUNT", "UNIQUECOUNT(field)", "Returns count of unique values"),
    func("STDEV", "STDEV(field)", "Returns sample standard deviation"),
    func("STDEVP", "STDEVP(field)", "Returns population standard deviation"),
];

pub static RETRIEVAL_FUNCTIONS: &[Function] = &[
    func("ASSETHOSTNAME", "ASSETHOSTNAME(ip)", "Returns hostname for IP from asset database"),
    func("ASSETPROPERTY", "ASSETPROPERTY('property', ip)", "Returns asset property value"),
    func("ASSETUSER", "ASSETUSER(ip)", "Returns username associated with IP"),
    func("NETWORKNAME", "NETWORKNAME(ip)", "Returns network name from hierarchy"),
    func(
        "FULLNETWORKNAME",
        "FULLNETWORKNAME(ip)",
        "Returns full network path from hierarchy",
    ),
    func("APPLICATIONNAME", "APPLICATIONNAME(applicationid)", "Returns application name"),
    func("CATEGORYNAME", "CATEGORYNAME(category)", "Returns category name"),
    func("DOMAINNAME", "DOMAINNAME(domainid)", "Returns domain name"),
    func("HOSTNAME", "HOSTNAME(processorid)", "Returns processor hostname"),
    func("LOGSOURCENAME", "LOGSOURCENAME(logsourceid)", "Returns log source name"),
    func(
        "LOGSOURCETYPENAME",
        "LOGSOURCETYPENAME(devicetype)",
        "Returns log source type name",
    ),
    func("PROCESSORNAME", "PROCESSORNAME(processorid)", "Returns processor name"),
    func(
        "PROTOCOLNAME",
        "PROTOCOLNAME(protocolid)",
        "Returns protocol name (TCP, UDP, etc.)",
    ),
    func("QIDNAME", "QIDNAME(qid)", "Returns event name for QID"),
    func("QIDDESCRIPTION", "QIDDESCRIPTION(qid)", "Returns event description for QID"),
    func("RULENAME", "RULENAME(ruleid)", "Returns rule name"),
];

pub static GEOGRAPHIC_FUNCTIONS: &[Function] = &[
    func(
        "GEO::LOOKUP",
        "GEO::LOOKUP(ip, 'property')",
        "Returns MaxMind location data as JSON",
    ),
    func(
        "GEO::LOOKUP_TEXT",
        "GEO::LOOKUP_TEXT(ip, 'property')",
        "Returns location data as text. Properties: city_name, country_name, continent_name",
    ),
    func(
        "GEO::DISTANCE",
        "GEO::DISTANCE(ip1, ip2)",
        "Returns distance between IPs in kilometers",
    ),
];

pub static REFERENCE_DATA_FUNCTIONS: &[Function] = &[
    func(
        "REFERENCESETCONTAINS",
        "REFERENCESETCONTAINS('SetName', value)",
        "Returns true if value is in reference set",
    ),
    func(
        "REFERENCEMAP",
        "REFERENCEMAP('MapName', key)",
        "Returns value from reference map",
    ),
    func(
        "REFERENCETABLE",
        "REFERENCETABLE('TableName', 'column', key)",
        "Returns column value from reference table",
    ),
];

pub static FILTER_FUNCTIONS: &[Function] = &[
    func(
        "INCIDR",
        "INCIDR('cidr', ip)",
        "Returns true if IP is in CIDR range. Example: INCIDR('192.168.0.0/16', sourceip)",
    ),
    func(
        "INOFFENSE",
        "INOFFENSE(offenseid)",
        "Returns true if event belongs to specified offense",
    ),
    func(
        "OFFENSE_TIME",
        "OFFENSE_TIME(offenseid)",
        "Limits query to offense timeframe",
    ),
];
